//! Checks Options
//!
//! What the user asked for, validated before anything touches the network.

use std::time::Duration;

use crate::domain::value_objects::PullRequestSelector;
use crate::error::{ChecksError, ChecksResult};

/// Polling interval used when neither the flag nor the config sets one
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Options for the checks use case
#[derive(Debug, Clone)]
pub struct ChecksOptions {
    /// Which pull request to inspect
    pub selector: PullRequestSelector,
    /// Keep polling until no check is pending
    pub watch: bool,
    /// Interval given explicitly on the command line
    pub interval: Option<Duration>,
    /// Interval from configuration, used when `interval` is unset
    pub default_interval: Duration,
}

impl ChecksOptions {
    pub fn new(selector: PullRequestSelector) -> Self {
        Self {
            selector,
            watch: false,
            interval: None,
            default_interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_watch(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }

    pub fn with_interval(mut self, interval: Option<Duration>) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_default_interval(mut self, interval: Duration) -> Self {
        self.default_interval = interval;
        self
    }

    /// Reject flag combinations that make no sense.
    ///
    /// Only an explicit `--interval` conflicts with single-shot mode; a
    /// configured default never does.
    pub fn validate(&self) -> ChecksResult<()> {
        if self.interval.is_some() && !self.watch {
            return Err(ChecksError::IntervalWithoutWatch);
        }
        Ok(())
    }

    /// Interval the watch loop actually sleeps for
    pub fn effective_interval(&self) -> Duration {
        self.interval.unwrap_or(self.default_interval)
    }
}
