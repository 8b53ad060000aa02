//! Checks Use Case implementation

use std::sync::atomic::AtomicBool;

use crate::domain::entities::CheckReport;
use crate::domain::ports::{CheckDisplay, PullRequestFetcher};
use crate::error::ChecksResult;

use super::options::ChecksOptions;
use super::outcome::resolve;
use super::pipeline::evaluate;
use super::watch::WatchSession;

/// Checks Use Case
///
/// Fetches the pull request, runs the pipeline, renders, and resolves the
/// outcome; in watch mode it repeats until nothing is pending.
pub struct ChecksUseCase<F> {
    fetcher: F,
    options: ChecksOptions,
}

impl<F: PullRequestFetcher> ChecksUseCase<F> {
    /// Create the use case; invalid options are rejected here, before any
    /// fetch can happen.
    pub fn new(fetcher: F, options: ChecksOptions) -> ChecksResult<Self> {
        options.validate()?;
        Ok(Self { fetcher, options })
    }

    pub fn options(&self) -> &ChecksOptions {
        &self.options
    }

    /// Fetch once and run the pipeline, without rendering.
    pub fn evaluate_once(&self) -> ChecksResult<CheckReport> {
        tracing::debug!(selector = %self.options.selector, "fetching pull request");
        let pr = self.fetcher.fetch(&self.options.selector)?;
        evaluate(&pr)
    }

    /// Run to completion.
    ///
    /// Returns `Ok` when all checks passed, `ChecksError::Silent` when the
    /// rendered output shows pending or failing checks, and any other error
    /// unchanged (nothing is rendered in that case).
    pub fn run<D>(&self, display: &mut D, running: &AtomicBool) -> ChecksResult<()>
    where
        D: CheckDisplay + ?Sized,
    {
        let report = if self.options.watch {
            let mut session = WatchSession::new(self.options.effective_interval());
            session.run(display, running, || self.evaluate_once())?
        } else {
            let report = self.evaluate_once()?;
            display.render(&report)?;
            report
        };

        resolve(&report)
    }
}
