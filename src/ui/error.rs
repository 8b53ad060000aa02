//! User-visible error output on stderr

use std::io::{self, Write};

use crate::error::ChecksError;
use crate::ui::json::events::ErrorEvent;
use crate::ui::json::write_typed_event;
use crate::ui::primitives::text::ColoredText;

/// Stable machine-readable code for `--json` error events
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<ChecksError>() {
        Some(ChecksError::NoCommit) => "no_commit",
        Some(ChecksError::NoChecks { .. }) => "no_checks",
        Some(ChecksError::IntervalWithoutWatch) => "invalid_flags",
        Some(ChecksError::UnknownRepository { .. }) => "unknown_repository",
        Some(ChecksError::InvalidRepo { .. }) => "invalid_repo",
        Some(ChecksError::Fetch { .. }) => "fetch",
        Some(ChecksError::Parse(_)) => "parse",
        Some(ChecksError::Io(_)) => "io",
        Some(ChecksError::Browser { .. }) => "browser",
        Some(ChecksError::Config { .. }) => "config",
        Some(ChecksError::Silent) => "checks_failed",
        Some(ChecksError::Interrupted) => "interrupted",
        None => "error",
    }
}

/// Write a user-visible error: an `error` event in JSON mode, otherwise the
/// message on one line.
pub fn write_error<W: Write + ?Sized>(out: &mut W, err: &anyhow::Error, json: bool, color: bool) -> io::Result<()> {
    let message = err.to_string();
    if json {
        return write_typed_event(out, &ErrorEvent::new(error_code(err), message));
    }
    writeln!(out, "{}", ColoredText::error(message).render(color))
}
