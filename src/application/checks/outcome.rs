//! Outcome Resolver - maps the aggregate state to a command result

use crate::domain::entities::CheckReport;
use crate::domain::value_objects::Outcome;
use crate::error::{ChecksError, ChecksResult};

/// `Ok` when every check passed (or was skipped); otherwise a silent error,
/// because the rendered summary already explains what went wrong.
pub fn resolve(report: &CheckReport) -> ChecksResult<()> {
    match report.outcome() {
        Outcome::AllPassed => Ok(()),
        Outcome::Pending | Outcome::Failed => Err(ChecksError::Silent),
    }
}
