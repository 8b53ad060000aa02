//! Watch Controller
//!
//! Polls until no check is pending. Frames are painted on the terminal's
//! alternate screen; once the outcome is final the alternate screen is left
//! and the final state is rendered once more on the normal screen so it stays
//! in the scrollback.
//!
//! The alternate screen is held by a guard for the whole loop, so every exit
//! path (final outcome, fetch error, Ctrl+C) restores the normal buffer.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::entities::CheckReport;
use crate::domain::ports::CheckDisplay;
use crate::domain::value_objects::AggregateSummary;
use crate::error::{ChecksError, ChecksResult};

/// How often a sleeping watch loop checks for cancellation
pub const CANCEL_POLL_MS: u64 = 50;

/// State of one `--watch` invocation
#[derive(Debug, Clone)]
pub struct WatchSession {
    interval: Duration,
    cycle: u64,
    last_summary: Option<AggregateSummary>,
}

impl WatchSession {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            cycle: 0,
            last_summary: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of completed fetch/evaluate cycles
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn last_summary(&self) -> Option<&AggregateSummary> {
        self.last_summary.as_ref()
    }

    /// Run the polling loop and return the final report.
    ///
    /// The first evaluation happens before the alternate screen is entered, so
    /// input errors (no commit, no checks) never touch the screen buffer.
    pub fn run<D, E>(
        &mut self,
        display: &mut D,
        running: &AtomicBool,
        mut evaluate: E,
    ) -> ChecksResult<CheckReport>
    where
        D: CheckDisplay + ?Sized,
        E: FnMut() -> ChecksResult<CheckReport>,
    {
        let mut report = self.next_report(running, &mut evaluate)?;

        let mut screen = AlternateScreen::enter(display)?;
        loop {
            if self.cycle > 1 {
                screen.display().clear_frame()?;
            }
            screen.display().render(&report)?;

            if report.outcome().is_final() {
                break;
            }

            self.sleep(running)?;
            report = self.next_report(running, &mut evaluate)?;
        }
        screen.leave()?;

        display.render(&report)?;
        tracing::info!(cycles = self.cycle, outcome = ?report.outcome(), "watch finished");
        Ok(report)
    }

    fn next_report<E>(&mut self, running: &AtomicBool, evaluate: &mut E) -> ChecksResult<CheckReport>
    where
        E: FnMut() -> ChecksResult<CheckReport>,
    {
        ensure_running(running)?;
        // An interrupt also kills a running `gh`, so cancellation wins over
        // whatever the fetch returned
        let result = evaluate();
        ensure_running(running)?;
        let report = result?;

        self.cycle += 1;
        self.last_summary = Some(report.summary);
        tracing::debug!(cycle = self.cycle, outcome = ?report.outcome(), "watch cycle");
        Ok(report)
    }

    /// Sleep for `interval` in short slices, checking for cancellation.
    ///
    /// An interval too large to add to the clock has no deadline; only
    /// cancellation ends it.
    fn sleep(&self, running: &AtomicBool) -> ChecksResult<()> {
        let slice = Duration::from_millis(CANCEL_POLL_MS);
        let deadline = Instant::now().checked_add(self.interval);
        loop {
            ensure_running(running)?;
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => slice,
            };
            if remaining.is_zero() {
                return Ok(());
            }
            thread::sleep(remaining.min(slice));
        }
    }
}

fn ensure_running(running: &AtomicBool) -> ChecksResult<()> {
    if running.load(Ordering::SeqCst) {
        Ok(())
    } else {
        tracing::info!("watch interrupted");
        Err(ChecksError::Interrupted)
    }
}

/// Scoped ownership of the alternate screen buffer.
struct AlternateScreen<'a, D: CheckDisplay + ?Sized> {
    display: &'a mut D,
    active: bool,
}

impl<'a, D: CheckDisplay + ?Sized> AlternateScreen<'a, D> {
    fn enter(display: &'a mut D) -> io::Result<Self> {
        display.enter_alternate_screen()?;
        Ok(Self {
            display,
            active: true,
        })
    }

    fn display(&mut self) -> &mut D {
        &mut *self.display
    }

    fn leave(mut self) -> io::Result<()> {
        self.active = false;
        self.display.leave_alternate_screen()
    }
}

impl<D: CheckDisplay + ?Sized> Drop for AlternateScreen<'_, D> {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = self.display.leave_alternate_screen() {
                tracing::warn!("failed to restore the normal screen buffer: {}", e);
            }
        }
    }
}
