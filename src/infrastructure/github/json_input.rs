//! Fetcher that reads a pull request document from a file or stdin

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::OnceLock;

use super::document::parse_document;
use crate::domain::entities::PullRequest;
use crate::domain::ports::PullRequestFetcher;
use crate::domain::value_objects::PullRequestSelector;
use crate::error::ChecksResult;

/// Where the document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Reads the same document `gh pr view --json` prints.
///
/// The selector is ignored. In watch mode a file is re-read on every cycle;
/// stdin can only be read once, so later cycles reuse the first document.
#[derive(Debug)]
pub struct JsonInputFetcher {
    source: InputSource,
    stdin_cache: OnceLock<String>,
}

impl JsonInputFetcher {
    /// `-` means stdin, anything else is a path.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let path = input.into();
        let source = if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        };
        Self {
            source,
            stdin_cache: OnceLock::new(),
        }
    }

    pub fn source(&self) -> &InputSource {
        &self.source
    }

    fn read(&self) -> io::Result<String> {
        match &self.source {
            InputSource::File(path) => fs::read_to_string(path),
            InputSource::Stdin => {
                if let Some(cached) = self.stdin_cache.get() {
                    return Ok(cached.clone());
                }
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                Ok(self.stdin_cache.get_or_init(|| buf).clone())
            }
        }
    }
}

impl PullRequestFetcher for JsonInputFetcher {
    fn fetch(&self, _selector: &PullRequestSelector) -> ChecksResult<PullRequest> {
        tracing::debug!(source = ?self.source, "reading pull request document");
        let json = self.read()?;
        parse_document(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChecksError;

    #[test]
    fn dash_means_stdin() {
        assert_eq!(JsonInputFetcher::new("-").source(), &InputSource::Stdin);
        assert_eq!(
            JsonInputFetcher::new("pr.json").source(),
            &InputSource::File(PathBuf::from("pr.json"))
        );
    }

    #[test]
    fn reads_document_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pr.json");
        fs::write(
            &path,
            r#"{"number": 9, "headRefName": "topic", "headRefOid": "abc",
                "statusCheckRollup": [{"__typename": "CheckRun", "name": "build"}]}"#,
        )
        .unwrap();

        let pr = JsonInputFetcher::new(&path)
            .fetch(&PullRequestSelector::CurrentBranch)
            .unwrap();
        assert_eq!(pr.number, 9);
        assert_eq!(pr.head_commit.unwrap().checks[0].name, "build");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonInputFetcher::new(dir.path().join("missing.json"))
            .fetch(&PullRequestSelector::CurrentBranch)
            .unwrap_err();
        assert!(matches!(err, ChecksError::Io(_)));
    }
}
