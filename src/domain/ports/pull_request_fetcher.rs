//! PullRequestFetcher port - where pull request data comes from
//!
//! Implementations:
//! - `GhCliFetcher` - runs `gh pr view --json ...`
//! - `JsonInputFetcher` - reads the same JSON document from a file or stdin
//! - in-memory fakes in tests

use crate::domain::entities::PullRequest;
use crate::domain::value_objects::PullRequestSelector;
use crate::error::ChecksResult;

/// Fetch a pull request together with the checks on its head commit.
///
/// Errors are reported to the user unchanged; implementations must not retry.
pub trait PullRequestFetcher {
    fn fetch(&self, selector: &PullRequestSelector) -> ChecksResult<PullRequest>;
}

impl<T: PullRequestFetcher + ?Sized> PullRequestFetcher for &T {
    fn fetch(&self, selector: &PullRequestSelector) -> ChecksResult<PullRequest> {
        (**self).fetch(selector)
    }
}

impl<T: PullRequestFetcher + ?Sized> PullRequestFetcher for Box<T> {
    fn fetch(&self, selector: &PullRequestSelector) -> ChecksResult<PullRequest> {
        (**self).fetch(selector)
    }
}
