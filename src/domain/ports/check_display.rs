//! CheckDisplay port - the output sink the watch controller drives
//!
//! The application layer decides *when* to enter the alternate screen, clear
//! or render; the implementation decides *how* (and whether the destination
//! supports it at all). Non-interactive destinations treat the screen
//! operations as no-ops.

use std::io;

use crate::domain::entities::CheckReport;

pub trait CheckDisplay {
    /// Switch to the terminal's alternate screen buffer
    fn enter_alternate_screen(&mut self) -> io::Result<()>;

    /// Restore the normal screen buffer
    fn leave_alternate_screen(&mut self) -> io::Result<()>;

    /// Wipe the current frame before a repaint
    fn clear_frame(&mut self) -> io::Result<()>;

    /// Write one full rendering of the report
    fn render(&mut self, report: &CheckReport) -> io::Result<()>;
}
