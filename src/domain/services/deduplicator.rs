//! Deduplicator
//!
//! CI systems emit a fresh record per rerun instead of updating the old one,
//! so the same logical check can show up several times with conflicting
//! results. Only the most recent attempt per `DedupKey` survives.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::domain::entities::{CheckRecord, DedupKey};

/// Collapse reruns into one record per `(kind, identity)`.
///
/// Output order is the order in which each key first appears in the input;
/// the record kept for a key is the one with the latest `started_at`, then the
/// latest `completed_at`, and on a full tie the earliest occurrence.
pub fn deduplicate(records: Vec<CheckRecord>) -> Vec<CheckRecord> {
    let mut order: Vec<DedupKey> = Vec::with_capacity(records.len());
    let mut best: HashMap<DedupKey, CheckRecord> = HashMap::with_capacity(records.len());

    for record in records {
        match best.entry(record.dedup_key()) {
            Entry::Occupied(mut slot) => {
                if is_more_recent(&record, slot.get()) {
                    slot.insert(record);
                }
            }
            Entry::Vacant(slot) => {
                order.push(slot.key().clone());
                slot.insert(record);
            }
        }
    }

    order.into_iter().filter_map(|key| best.remove(&key)).collect()
}

/// Absent timestamps sort before any present one.
fn is_more_recent(candidate: &CheckRecord, current: &CheckRecord) -> bool {
    (candidate.started_at, candidate.completed_at) > (current.started_at, current.completed_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CheckState;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2022, 1, day, 1, 1, 1).unwrap())
    }

    fn run(name: &str, conclusion: &str, started: Option<DateTime<Utc>>, link: &str) -> CheckRecord {
        CheckRecord {
            identity: name.to_string(),
            state: CheckState::Run {
                status: "completed".to_string(),
                conclusion: conclusion.to_string(),
            },
            started_at: started,
            completed_at: started,
            details_link: link.to_string(),
        }
    }

    fn status(context: &str, state: &str, started: Option<DateTime<Utc>>, link: &str) -> CheckRecord {
        CheckRecord {
            identity: context.to_string(),
            state: CheckState::Status {
                state: state.to_string(),
            },
            started_at: started,
            completed_at: started,
            details_link: link.to_string(),
        }
    }

    #[test]
    fn rerun_of_check_run_keeps_latest_in_first_seen_position() {
        let input = vec![
            run("build (ubuntu-latest)", "success", at(1), "runs/1"),
            run("lint", "failure", at(1), "runs/2"),
            run("lint", "success", at(2), "runs/3"),
        ];

        let out = deduplicate(input);
        let links: Vec<_> = out.iter().map(|r| r.details_link.as_str()).collect();
        assert_eq!(links, vec!["runs/1", "runs/3"]);
    }

    #[test]
    fn rerun_of_status_context_keeps_latest() {
        let input = vec![
            status("Windows GPU", "failure", at(1), "2"),
            status("Windows GPU", "success", at(2), "3"),
            status("Linux GPU", "success", at(1), "1"),
        ];

        let out = deduplicate(input);
        let links: Vec<_> = out.iter().map(|r| r.details_link.as_str()).collect();
        assert_eq!(links, vec!["3", "1"]);
    }

    #[test]
    fn older_rerun_after_newer_is_dropped() {
        let input = vec![
            run("lint", "success", at(2), "new"),
            run("lint", "failure", at(1), "old"),
        ];

        let out = deduplicate(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].details_link, "new");
    }

    #[test]
    fn same_identity_different_kind_is_not_a_duplicate() {
        let input = vec![
            run("ci", "success", at(1), "run"),
            status("ci", "success", at(1), "status"),
        ];
        assert_eq!(deduplicate(input).len(), 2);
    }

    #[test]
    fn completed_at_breaks_start_time_tie() {
        let mut early = run("lint", "failure", at(1), "early");
        early.completed_at = at(2);
        let mut late = run("lint", "success", at(1), "late");
        late.completed_at = at(3);

        let out = deduplicate(vec![early, late]);
        assert_eq!(out[0].details_link, "late");
    }

    #[test]
    fn full_tie_keeps_first_occurrence() {
        let input = vec![
            run("lint", "failure", at(1), "first"),
            run("lint", "success", at(1), "second"),
        ];
        assert_eq!(deduplicate(input)[0].details_link, "first");
    }

    #[test]
    fn record_with_timestamp_beats_record_without() {
        let input = vec![
            run("lint", "failure", None, "none"),
            run("lint", "success", at(1), "some"),
        ];
        assert_eq!(deduplicate(input)[0].details_link, "some");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(deduplicate(Vec::new()).is_empty());
    }
}
