//! Generators shared by the property tests.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use prchecks::domain::entities::{CheckRecord, CheckState};

/// A small pool of names so that collisions (reruns) are frequent.
pub fn identity() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["build", "lint", "test", "deploy", "Docs"]).prop_map(str::to_string)
}

pub fn timestamp() -> impl Strategy<Value = Option<DateTime<Utc>>> {
    prop::option::of((0i64..10_000).prop_map(|secs| {
        Utc.timestamp_opt(1_600_000_000 + secs, 0).unwrap()
    }))
}

pub fn run_status() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["completed", "in_progress", "queued", "waiting", ""])
        .prop_map(str::to_string)
}

pub fn conclusion() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "success",
            "neutral",
            "skipped",
            "failure",
            "cancelled",
            "timed_out",
            "action_required",
            "stale",
            "",
        ])
        .prop_map(str::to_string),
        "[a-z_]{1,12}",
    ]
}

pub fn status_state() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["success", "pending", "failure", "error", ""])
            .prop_map(str::to_string),
        "[a-z_]{1,12}",
    ]
}

pub fn state() -> impl Strategy<Value = CheckState> {
    prop_oneof![
        (run_status(), conclusion())
            .prop_map(|(status, conclusion)| CheckState::Run { status, conclusion }),
        status_state().prop_map(|state| CheckState::Status { state }),
    ]
}

pub fn record() -> impl Strategy<Value = CheckRecord> {
    (identity(), state(), timestamp(), timestamp(), "[a-z]{0,6}").prop_map(
        |(identity, state, started_at, completed_at, details_link)| CheckRecord {
            identity,
            state,
            started_at,
            completed_at,
            details_link,
        },
    )
}

pub fn records() -> impl Strategy<Value = Vec<CheckRecord>> {
    prop::collection::vec(record(), 0..24)
}
