//! Outcome value object - the overall verdict of one evaluation

use serde::Serialize;

/// Overall outcome of a set of checks.
///
/// Failure beats pending beats success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    AllPassed,
    Pending,
    Failed,
}

impl Outcome {
    /// Summary sentence shown above the table
    pub fn headline(&self) -> &'static str {
        match self {
            Outcome::AllPassed => "All checks were successful",
            Outcome::Pending => "Some checks are still pending",
            Outcome::Failed => "Some checks were not successful",
        }
    }

    /// Whether a watch session should keep polling
    pub fn is_final(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.headline())
    }
}
