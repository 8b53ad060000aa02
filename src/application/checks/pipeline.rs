//! Check pipeline: normalize → deduplicate → classify/aggregate

use crate::domain::entities::{CheckReport, PullRequest};
use crate::domain::services::{aggregate, deduplicate, normalize};
use crate::error::ChecksResult;

/// Turn one fetched pull request into a report.
///
/// Fails with `NoCommit` / `NoChecks` before anything is classified.
pub fn evaluate(pr: &PullRequest) -> ChecksResult<CheckReport> {
    let records = normalize(pr)?;
    let fetched = records.len();

    let records = deduplicate(records);
    if records.len() < fetched {
        tracing::debug!(
            pr = pr.number,
            dropped = fetched - records.len(),
            "collapsed rerun check records"
        );
    }

    let report = aggregate(records);
    tracing::debug!(
        pr = pr.number,
        failing = report.summary.failing,
        passing = report.summary.passing,
        skipped = report.summary.skipped,
        pending = report.summary.pending,
        "evaluated checks"
    );
    Ok(report)
}
