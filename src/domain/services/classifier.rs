//! Classifier - maps vendor states onto the four buckets

use crate::domain::entities::{CheckRecord, CheckState};
use crate::domain::value_objects::Classification;

/// Classify one normalized record.
///
/// Unrecognised conclusions and states count as failures; nothing is ever
/// dropped.
pub fn classify(record: &CheckRecord) -> Classification {
    match &record.state {
        CheckState::Run { status, conclusion } => classify_run(status, conclusion),
        CheckState::Status { state } => classify_status(state),
    }
}

fn classify_run(status: &str, conclusion: &str) -> Classification {
    if status != "completed" {
        return Classification::Pending;
    }

    match conclusion {
        "success" | "neutral" => Classification::Pass,
        "skipped" => Classification::Skipped,
        // failure, cancelled, timed_out, action_required, stale, and anything newer
        _ => Classification::Fail,
    }
}

fn classify_status(state: &str) -> Classification {
    match state {
        "success" => Classification::Pass,
        "pending" | "" => Classification::Pending,
        _ => Classification::Fail,
    }
}
