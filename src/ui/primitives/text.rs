//! Styled text that degrades to plain text when color is off

use std::fmt;

use crossterm::style::{Color, ContentStyle, Stylize};

use crate::ui::theme::colors;

/// A string plus the style it gets on a color terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    foreground: Option<Color>,
    bold: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            foreground: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::plain(text).with_foreground(colors::SUCCESS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::plain(text).with_foreground(colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::plain(text).with_foreground(colors::WARNING)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::plain(text).with_foreground(colors::DIM)
    }

    fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Escape-wrapped text when `color` is set, the bare text otherwise.
    pub fn render(&self, color: bool) -> String {
        if !color || (self.foreground.is_none() && !self.bold) {
            return self.text.clone();
        }

        let mut style = ContentStyle::new();
        style.foreground_color = self.foreground;
        if self.bold {
            style = style.bold();
        }
        style.apply(self.text.as_str()).to_string()
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_off_is_plain() {
        assert_eq!(ColoredText::success("ok").bold().render(false), "ok");
        assert_eq!(ColoredText::plain("headline").render(true), "headline");
    }

    #[test]
    fn color_on_wraps_in_escapes() {
        let rendered = ColoredText::error("no").render(true);
        assert!(rendered.starts_with("\u{1b}["));
        assert!(rendered.contains("no"));
    }

    #[test]
    fn bold_alone_is_styled() {
        let t = ColoredText::plain("headline").bold();
        assert_eq!(t.text(), "headline");
        assert_ne!(t.render(true), "headline");
    }
}
