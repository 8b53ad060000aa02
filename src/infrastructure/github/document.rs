//! The `gh pr view --json` document

use serde::Deserialize;

use crate::domain::entities::{PullRequest, RawCheck};
use crate::error::ChecksResult;

/// Fields requested from `gh pr view --json`
pub const PR_VIEW_FIELDS: &str = "number,url,headRefName,headRefOid,statusCheckRollup";

/// Wire shape of a pull request document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestDocument {
    pub number: u64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub head_ref_name: Option<String>,
    #[serde(default)]
    pub head_ref_oid: Option<String>,
    #[serde(default)]
    pub status_check_rollup: Option<Vec<RawCheck>>,
}

impl From<PullRequestDocument> for PullRequest {
    fn from(doc: PullRequestDocument) -> Self {
        let mut pr = PullRequest::new(doc.number, doc.head_ref_name.unwrap_or_default());

        if let Some(url) = doc.url.filter(|u| !u.trim().is_empty()) {
            pr = pr.with_url(url);
        }

        // No head oid means the pull request has no commits
        match doc.head_ref_oid.filter(|oid| !oid.trim().is_empty()) {
            Some(oid) => pr.with_head_commit(oid, doc.status_check_rollup.unwrap_or_default()),
            None => pr,
        }
    }
}

/// Parse a pull request document.
pub fn parse_document(json: &str) -> ChecksResult<PullRequest> {
    let doc: PullRequestDocument = serde_json::from_str(json)?;
    tracing::debug!(
        number = doc.number,
        checks = doc.status_check_rollup.as_ref().map_or(0, Vec::len),
        "parsed pull request document"
    );
    Ok(doc.into())
}
