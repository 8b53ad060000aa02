//! What the attached terminal can do

use is_terminal::IsTerminal;

/// Variables set by common CI providers
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_URL",
    "TF_BUILD",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    pub supports_color: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Capabilities given the tty state of both streams and an environment
    /// lookup.
    pub(crate) fn from_env<F>(stdout_tty: bool, stderr_tty: bool, get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let no_color = get_env("NO_COLOR").is_some_and(|v| !v.is_empty());

        Self {
            stdout_tty,
            stderr_tty,
            supports_color: stdout_tty && !dumb && !no_color,
            is_ci: CI_MARKERS.iter().any(|key| get_env(key).is_some()),
        }
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    TerminalCapabilities::from_env(
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
        |key| std::env::var(key).ok(),
    )
}
