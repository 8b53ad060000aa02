//! JSON event types for `--json` output.

use serde::Serialize;

use crate::domain::entities::ClassifiedCheck;
use crate::domain::value_objects::{AggregateSummary, Classification, Outcome};

/// One deduplicated check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    pub kind: &'static str,
    pub bucket: Classification,
    /// Compact elapsed time (`1m26s`), `null` when unknown
    pub elapsed: Option<String>,
    pub link: &'a str,
}

impl<'a> CheckEvent<'a> {
    pub fn new(check: &'a ClassifiedCheck) -> Self {
        Self {
            event: "check",
            name: &check.record.identity,
            kind: check.record.kind().as_str(),
            bucket: check.classification,
            elapsed: check.record.elapsed().map(|e| e.to_string()),
            link: &check.record.details_link,
        }
    }
}

/// Totals for one evaluation; always the last event of a frame.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEvent {
    pub event: &'static str,
    pub failing: usize,
    pub passing: usize,
    pub skipped: usize,
    pub pending: usize,
    pub total: usize,
    pub outcome: Outcome,
    pub headline: &'static str,
}

impl SummaryEvent {
    pub fn new(summary: &AggregateSummary) -> Self {
        let outcome = summary.outcome();
        Self {
            event: "summary",
            failing: summary.failing,
            passing: summary.passing,
            skipped: summary.skipped,
            pending: summary.pending,
            total: summary.total,
            outcome,
            headline: outcome.headline(),
        }
    }
}

/// A user-visible error, written to stderr.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
        }
    }
}
