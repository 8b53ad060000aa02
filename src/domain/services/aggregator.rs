//! Aggregator - classifies deduplicated records into a `CheckReport`

use crate::domain::entities::{CheckRecord, CheckReport, ClassifiedCheck};
use crate::domain::services::classify;

/// Classify every record and compute the summary; order is preserved.
pub fn aggregate(records: Vec<CheckRecord>) -> CheckReport {
    let checks = records
        .into_iter()
        .map(|record| ClassifiedCheck {
            classification: classify(&record),
            record,
        })
        .collect();
    CheckReport::new(checks)
}
