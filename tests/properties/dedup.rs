//! Property tests for rerun deduplication.

use std::collections::HashSet;

use proptest::prelude::*;

use prchecks::domain::services::deduplicate;

use super::strategies::records;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Deduplicating twice is the same as deduplicating once.
    #[test]
    fn property_dedup_is_idempotent(input in records()) {
        let once = deduplicate(input);
        let twice = deduplicate(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: At most one record per (kind, identity) survives.
    #[test]
    fn property_dedup_keys_are_unique(input in records()) {
        let output = deduplicate(input);
        let keys: HashSet<_> = output.iter().map(|r| r.dedup_key()).collect();
        prop_assert_eq!(keys.len(), output.len());
    }

    /// PROPERTY: Output order is the order of first appearance of each key.
    #[test]
    fn property_dedup_preserves_first_seen_order(input in records()) {
        let mut seen = HashSet::new();
        let expected: Vec<_> = input
            .iter()
            .map(|r| r.dedup_key())
            .filter(|key| seen.insert(key.clone()))
            .collect();

        let actual: Vec<_> = deduplicate(input).iter().map(|r| r.dedup_key()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: The survivor has the latest start time of its key; among
    /// equal starts, the latest completion; among full ties, the first one.
    #[test]
    fn property_dedup_keeps_most_recent(input in records()) {
        let output = deduplicate(input.clone());

        for survivor in &output {
            let key = survivor.dedup_key();
            let candidates: Vec<_> = input.iter().filter(|r| r.dedup_key() == key).collect();

            let best = candidates
                .iter()
                .map(|r| (r.started_at, r.completed_at))
                .max()
                .unwrap();
            prop_assert_eq!((survivor.started_at, survivor.completed_at), best);

            let first_best = candidates
                .iter()
                .find(|r| (r.started_at, r.completed_at) == best)
                .unwrap();
            prop_assert_eq!(survivor, *first_best);
        }
    }

    /// PROPERTY: Recency does not depend on input order.
    #[test]
    fn property_dedup_recency_is_order_independent(input in records()) {
        let mut reversed = input.clone();
        reversed.reverse();

        let times = |records: Vec<_>| {
            let mut out: Vec<_> = deduplicate(records)
                .into_iter()
                .map(|r: prchecks::CheckRecord| (r.dedup_key(), r.started_at, r.completed_at))
                .collect();
            out.sort_by(|a, b| (a.0.kind, &a.0.identity).cmp(&(b.0.kind, &b.0.identity)));
            out
        };

        prop_assert_eq!(times(input), times(reversed));
    }
}
