//! Check report - the result of one pass through the pipeline

use crate::domain::entities::CheckRecord;
use crate::domain::value_objects::{AggregateSummary, Classification, Outcome};

/// A deduplicated record together with its bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCheck {
    pub record: CheckRecord,
    pub classification: Classification,
}

/// Everything a renderer needs for one frame.
///
/// `checks` keeps dedup order (first appearance of each check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub checks: Vec<ClassifiedCheck>,
    pub summary: AggregateSummary,
}

impl CheckReport {
    pub fn new(checks: Vec<ClassifiedCheck>) -> Self {
        let summary = checks.iter().map(|c| c.classification).collect();
        Self { checks, summary }
    }

    pub fn outcome(&self) -> Outcome {
        self.summary.outcome()
    }

    /// Checks ordered by identity (byte order, case-sensitive).
    ///
    /// The sort is stable, so a run and a status sharing a name keep dedup
    /// order.
    pub fn sorted_by_identity(&self) -> Vec<&ClassifiedCheck> {
        let mut sorted: Vec<&ClassifiedCheck> = self.checks.iter().collect();
        sorted.sort_by(|a, b| a.record.identity.cmp(&b.record.identity));
        sorted
    }
}
