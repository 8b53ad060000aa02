//! GitHub pull request fetchers
//!
//! Both fetchers consume the document printed by
//! `gh pr view --json number,url,headRefName,headRefOid,statusCheckRollup`.

mod document;
mod gh_cli;
mod json_input;

pub use document::{parse_document, PullRequestDocument, PR_VIEW_FIELDS};
pub use gh_cli::GhCliFetcher;
pub use json_input::{InputSource, JsonInputFetcher};
