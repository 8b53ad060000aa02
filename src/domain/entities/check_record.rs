//! Normalized check record
//!
//! Downstream logic (dedup, classification, rendering) only ever sees this
//! shape, never the raw upstream entry.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::Elapsed;

/// Which upstream shape a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckKind {
    /// CI check run with separate status and conclusion
    Run,
    /// Legacy commit status with a single combined state
    Status,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Run => "run",
            CheckKind::Status => "status",
        }
    }
}

/// Raw vendor state, lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckState {
    Run { status: String, conclusion: String },
    Status { state: String },
}

impl CheckState {
    pub fn kind(&self) -> CheckKind {
        match self {
            CheckState::Run { .. } => CheckKind::Run,
            CheckState::Status { .. } => CheckKind::Status,
        }
    }
}

/// Identity of a logical check: reruns share the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub kind: CheckKind,
    pub identity: String,
}

/// A check from one fetch, in normalized form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRecord {
    /// Check name (run) or status context label (status); never empty
    pub identity: String,
    pub state: CheckState,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Where to view details; may be empty
    pub details_link: String,
}

impl CheckRecord {
    pub fn kind(&self) -> CheckKind {
        self.state.kind()
    }

    pub fn dedup_key(&self) -> DedupKey {
        DedupKey {
            kind: self.kind(),
            identity: self.identity.clone(),
        }
    }

    /// Wall-clock duration between start and completion, if both are known and
    /// the difference is positive.
    pub fn elapsed(&self) -> Option<Elapsed> {
        let (started, completed) = (self.started_at?, self.completed_at?);
        let duration = completed.signed_duration_since(started).to_std().ok()?;
        if duration.is_zero() {
            return None;
        }
        Some(Elapsed::new(duration))
    }
}
