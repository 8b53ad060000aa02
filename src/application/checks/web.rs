//! Web mode - open the checks tab in a browser instead of evaluating locally

use std::io::Write;

use crate::domain::ports::{Browser, PullRequestFetcher};
use crate::domain::value_objects::{PullRequestSelector, RepoRef};
use crate::error::{ChecksError, ChecksResult};

/// Resolve the pull request, build its checks URL and hand it to the browser.
///
/// `repo` overrides the repository derived from the pull request URL. When
/// `announce` is set (interactive stderr), a one-line notice naming the
/// destination is written to `notice` first.
pub fn open_in_browser<F, B>(
    fetcher: &F,
    browser: &B,
    selector: &PullRequestSelector,
    repo: Option<&RepoRef>,
    notice: &mut dyn Write,
    announce: bool,
) -> ChecksResult<String>
where
    F: PullRequestFetcher + ?Sized,
    B: Browser + ?Sized,
{
    let pr = fetcher.fetch(selector)?;

    let repo = match repo {
        Some(repo) => repo.clone(),
        None => pr
            .url
            .as_deref()
            .and_then(RepoRef::from_pull_request_url)
            .map(|(repo, _)| repo)
            .ok_or(ChecksError::UnknownRepository { number: pr.number })?,
    };

    let url = repo.checks_url(pr.number);
    if announce {
        writeln!(notice, "Opening {} in your browser.", repo.checks_path(pr.number))?;
    }

    tracing::info!(%url, "opening browser");
    browser.browse(&url)?;
    Ok(url)
}
