use crate::config::ColorMode;
use crate::presentation::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output mode for one invocation.
///
/// Built once in `main` and passed down; nothing below it queries the
/// terminal on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config_color: ColorMode) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config_color, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config_color: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = if json {
            false
        } else {
            match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config_color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => caps.supports_color && !caps.is_ci,
                },
            }
        };

        Self {
            json,
            verbose,
            caps,
            color,
        }
    }

    /// Human table with alternate-screen repaint
    pub fn interactive(&self) -> bool {
        !self.json && self.caps.stdout_tty
    }

    /// Whether notices meant for a person may go to stderr
    pub fn stderr_interactive(&self) -> bool {
        self.caps.stderr_tty
    }
}
