use crossterm::style::Color;

use crate::domain::value_objects::Classification;
use crate::ui::primitives::text::ColoredText;

/// Semantic colors. Only these may be used by views.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

/// Row glyphs of the check table
pub mod icons {
    pub const PASS: &str = "✓";
    pub const FAIL: &str = "X";
    pub const PENDING: &str = "*";
    pub const SKIPPED: &str = "-";
    pub const WARNING: &str = "!";
}

/// Glyph for a classification, in its semantic color.
pub fn glyph(classification: Classification) -> ColoredText {
    match classification {
        Classification::Pass => ColoredText::success(icons::PASS),
        Classification::Fail => ColoredText::error(icons::FAIL),
        Classification::Pending => ColoredText::warning(icons::PENDING),
        Classification::Skipped => ColoredText::dim(icons::SKIPPED),
    }
}
