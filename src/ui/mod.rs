//! Terminal user interface
//!
//! - `terminal` / `context` - capability detection and the resolved UI mode
//! - `theme` / `primitives` - glyphs and semantic colors
//! - `views` - check report renderers (table, tab-separated, NDJSON)
//! - `display` - the terminal `CheckDisplay` (alternate screen, repaint)
//! - `json` - NDJSON event types
//! - `error` / `output` - diagnostics on stderr

pub mod context;
pub mod display;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

pub use context::UiContext;
pub use display::TerminalDisplay;
pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use views::checks::RenderMode;
