//! Fetcher backed by the `gh` command-line tool

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::document::{parse_document, PR_VIEW_FIELDS};
use crate::domain::entities::PullRequest;
use crate::domain::ports::PullRequestFetcher;
use crate::domain::value_objects::{PullRequestSelector, RepoRef};
use crate::error::{ChecksError, ChecksResult};

/// Runs `gh pr view --json ...` and parses its output.
///
/// Authentication, host selection and retries are left to `gh`.
#[derive(Debug, Clone)]
pub struct GhCliFetcher {
    program: PathBuf,
    repo: Option<RepoRef>,
}

impl GhCliFetcher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            repo: None,
        }
    }

    /// Target a repository other than the one of the current directory.
    pub fn with_repo(mut self, repo: Option<RepoRef>) -> Self {
        self.repo = repo;
        self
    }

    /// Arguments passed to `gh` for a selector
    pub fn args(&self, selector: &PullRequestSelector) -> Vec<String> {
        let mut args = vec!["pr".to_string(), "view".to_string()];
        if let Some(arg) = selector.to_arg() {
            args.push(arg);
        }
        args.push("--json".to_string());
        args.push(PR_VIEW_FIELDS.to_string());
        if let Some(repo) = &self.repo {
            args.push("--repo".to_string());
            args.push(format!("{}/{}/{}", repo.host, repo.owner, repo.name));
        }
        args
    }
}

impl PullRequestFetcher for GhCliFetcher {
    fn fetch(&self, selector: &PullRequestSelector) -> ChecksResult<PullRequest> {
        let args = self.args(selector);
        tracing::debug!(program = %self.program.display(), ?args, "running gh");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ChecksError::Fetch {
                    message: format!("'{}' not found; is the GitHub CLI installed?", self.program.display()),
                },
                _ => ChecksError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("gh exited with status {:?}", output.status.code()),
                detail => detail.to_string(),
            };
            return Err(ChecksError::Fetch { message });
        }

        parse_document(&String::from_utf8_lossy(&output.stdout))
    }
}
