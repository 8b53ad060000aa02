//! Aggregate summary value object - per-bucket counts and the overall outcome

use serde::Serialize;

use super::{Classification, Outcome};

/// Per-bucket counts of one evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    pub failing: usize,
    pub passing: usize,
    pub skipped: usize,
    pub pending: usize,
    pub total: usize,
}

impl AggregateSummary {
    pub fn add(&mut self, classification: Classification) {
        match classification {
            Classification::Fail => self.failing += 1,
            Classification::Pass => self.passing += 1,
            Classification::Skipped => self.skipped += 1,
            Classification::Pending => self.pending += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::Fail => self.failing,
            Classification::Pass => self.passing,
            Classification::Skipped => self.skipped,
            Classification::Pending => self.pending,
        }
    }

    /// A single failure dominates, even when most checks are still pending.
    pub fn outcome(&self) -> Outcome {
        if self.failing > 0 {
            Outcome::Failed
        } else if self.pending > 0 {
            Outcome::Pending
        } else {
            Outcome::AllPassed
        }
    }
}

impl FromIterator<Classification> for AggregateSummary {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        let mut summary = Self::default();
        for classification in iter {
            summary.add(classification);
        }
        summary
    }
}
