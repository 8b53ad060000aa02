//! prchecks - CI check status for a pull request
//!
//! Fetches the checks reported on a pull request's head commit, collapses
//! reruns, classifies each check as pass, fail, pending or skipped, and
//! renders a summary. Watch mode polls until nothing is pending.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{evaluate, ChecksOptions, ChecksUseCase, WatchSession};
pub use config::Config;
pub use domain::entities::{CheckRecord, CheckReport, PullRequest, RawCheck};
pub use domain::value_objects::{AggregateSummary, Classification, Outcome, PullRequestSelector};
pub use error::{ChecksError, ChecksResult};
