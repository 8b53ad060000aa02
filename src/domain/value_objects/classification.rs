//! Classification value object - the four-way bucket of a single check

use serde::Serialize;

/// Which bucket a check falls into.
///
/// Always derived from a record's state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Pass,
    Fail,
    Pending,
    Skipped,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Pass,
        Classification::Fail,
        Classification::Pending,
        Classification::Skipped,
    ];

    /// Lowercase word used by the machine-readable output
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Pass => "pass",
            Classification::Fail => "fail",
            Classification::Pending => "pending",
            Classification::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercase() {
        let words: Vec<_> = Classification::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(words, vec!["pass", "fail", "pending", "skipped"]);
    }
}
