//! Terminal implementation of `CheckDisplay`

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::domain::entities::CheckReport;
use crate::domain::ports::CheckDisplay;
use crate::ui::views::checks::RenderMode;

/// Writes rendered reports to `out`.
///
/// Screen control (alternate buffer, repaint) is only emitted in table mode;
/// for the tab-separated and NDJSON streams those calls are no-ops and each
/// frame is simply appended.
pub struct TerminalDisplay<W: Write> {
    out: W,
    mode: RenderMode,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, mode: RenderMode) -> Self {
        Self { out, mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CheckDisplay for TerminalDisplay<W> {
    fn enter_alternate_screen(&mut self) -> io::Result<()> {
        if self.mode.is_interactive() {
            self.out.queue(terminal::EnterAlternateScreen)?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> io::Result<()> {
        if self.mode.is_interactive() {
            self.out.queue(terminal::LeaveAlternateScreen)?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn clear_frame(&mut self) -> io::Result<()> {
        if self.mode.is_interactive() {
            self.out.queue(cursor::MoveTo(0, 0))?;
            self.out
                .queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }
        Ok(())
    }

    fn render(&mut self, report: &CheckReport) -> io::Result<()> {
        let frame = self.mode.render(report)?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
