//! Domain Entities
//!
//! - `PullRequest` - The pull request and its head commit's raw checks
//! - `CheckRecord` - One normalized check, recreated on every fetch
//! - `CheckReport` - Deduplicated, classified checks plus their summary

mod check_record;
mod check_report;
mod pull_request;

pub use check_record::{CheckKind, CheckRecord, CheckState, DedupKey};
pub use check_report::{CheckReport, ClassifiedCheck};
pub use pull_request::{
    HeadCommit, PullRequest, RawCheck, CHECK_RUN_TYPENAME, STATUS_CONTEXT_TYPENAME,
};
