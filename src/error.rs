//! Error types for prchecks
//!
//! Library code returns `ChecksError`; the binary wraps it in `anyhow` and
//! maps it to an exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for prchecks operations
pub type ChecksResult<T> = Result<T, ChecksError>;

/// Main error type for prchecks operations
#[derive(Error, Debug)]
pub enum ChecksError {
    /// The pull request has no head commit to read checks from
    #[error("no commit found on the pull request")]
    NoCommit,

    /// The head commit exists but reports no checks at all
    #[error("no checks reported on the '{branch}' branch")]
    NoChecks { branch: String },

    /// `--interval` given without `--watch`
    #[error("cannot use `--interval` flag without `--watch` flag")]
    IntervalWithoutWatch,

    /// Web mode could not work out which repository the pull request lives in
    #[error("could not determine the repository of pull request #{number}; pass --repo OWNER/REPO")]
    UnknownRepository { number: u64 },

    /// `--repo` value that is not `[HOST/]OWNER/REPO`
    #[error("invalid repository '{value}': expected [HOST/]OWNER/REPO")]
    InvalidRepo { value: String },

    /// The fetch collaborator failed (transport, gh exit status, ...)
    #[error("failed to fetch pull request: {message}")]
    Fetch { message: String },

    /// The fetched document is not a pull request
    #[error("could not parse pull request data: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The browser could not be launched
    #[error("failed to open browser: {message}")]
    Browser { message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Aggregate state is pending or failing.
    ///
    /// The rendered summary already explains the condition, so callers exit
    /// non-zero without printing anything else.
    #[error("SilentError")]
    Silent,

    /// The user interrupted a watch session
    #[error("interrupted")]
    Interrupted,
}

impl ChecksError {
    /// Whether the caller should suppress its own diagnostic for this error.
    pub fn is_silent(&self) -> bool {
        matches!(self, ChecksError::Silent | ChecksError::Interrupted)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ChecksError::Interrupted => 130,
            _ => 1,
        }
    }
}
