//! Property tests for classification and outcome precedence.

use proptest::prelude::*;

use prchecks::domain::entities::CheckState;
use prchecks::domain::services::{aggregate, classify};
use prchecks::{AggregateSummary, Classification, Outcome};

use super::strategies::{record, records};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every record lands in a bucket; unknown conclusions fail.
    #[test]
    fn property_classification_is_total(record in record()) {
        let bucket = classify(&record);
        prop_assert!(Classification::ALL.contains(&bucket));

        if let CheckState::Run { status, conclusion } = &record.state {
            let known = ["success", "neutral", "skipped"];
            if status == "completed" && !known.contains(&conclusion.as_str()) {
                prop_assert_eq!(bucket, Classification::Fail);
            }
        }
    }

    /// PROPERTY: Status-style checks are never skipped.
    #[test]
    fn property_status_checks_never_skip(record in record()) {
        if matches!(record.state, CheckState::Status { .. }) {
            prop_assert_ne!(classify(&record), Classification::Skipped);
        }
    }

    /// PROPERTY: Counts add up to the number of records.
    #[test]
    fn property_summary_counts_every_record(input in records()) {
        let count = input.len();
        let report = aggregate(input);
        let s = report.summary;
        prop_assert_eq!(s.total, count);
        prop_assert_eq!(s.failing + s.passing + s.skipped + s.pending, count);
    }

    /// PROPERTY: Failure beats pending beats success.
    #[test]
    fn property_outcome_precedence(
        failing in 0usize..5,
        passing in 0usize..5,
        skipped in 0usize..5,
        pending in 0usize..5,
    ) {
        let summary = AggregateSummary {
            failing,
            passing,
            skipped,
            pending,
            total: failing + passing + skipped + pending,
        };

        let expected = if failing > 0 {
            Outcome::Failed
        } else if pending > 0 {
            Outcome::Pending
        } else {
            Outcome::AllPassed
        };
        prop_assert_eq!(summary.outcome(), expected);
    }
}
