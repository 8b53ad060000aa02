//! Pull request entity and the raw check entries reported on its head commit.
//!
//! `RawCheck` mirrors the upstream rollup entry as closely as possible: both
//! the run-style and the status-style shapes land in the same struct, told
//! apart by `type_name`. Normalization into `CheckRecord` happens in
//! `domain::services::normalizer`.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer};

/// Upstream discriminator for run-style checks
pub const CHECK_RUN_TYPENAME: &str = "CheckRun";
/// Upstream discriminator for status-style checks
pub const STATUS_CONTEXT_TYPENAME: &str = "StatusContext";

/// A pull request as seen by the check pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    /// Web URL of the pull request, when the fetcher knows it
    pub url: Option<String>,
    /// Name of the head branch
    pub head_ref_name: String,
    /// Head commit; `None` when the pull request has no commits
    pub head_commit: Option<HeadCommit>,
}

/// Head commit of a pull request and the checks reported on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadCommit {
    pub oid: String,
    pub checks: Vec<RawCheck>,
}

impl PullRequest {
    pub fn new(number: u64, head_ref_name: impl Into<String>) -> Self {
        Self {
            number,
            url: None,
            head_ref_name: head_ref_name.into(),
            head_commit: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_head_commit(mut self, oid: impl Into<String>, checks: Vec<RawCheck>) -> Self {
        self.head_commit = Some(HeadCommit {
            oid: oid.into(),
            checks,
        });
        self
    }
}

/// One entry of the upstream status check rollup.
///
/// Every field is optional upstream; missing and `null` values become empty
/// strings or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCheck {
    #[serde(rename = "__typename", default, deserialize_with = "string_or_null")]
    pub type_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub context: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub conclusion: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub state: String,
    #[serde(default, deserialize_with = "timestamp_or_null")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp_or_null")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub details_url: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub target_url: String,
}

impl RawCheck {
    /// A run-style entry (`CheckRun`)
    pub fn check_run(
        name: impl Into<String>,
        status: impl Into<String>,
        conclusion: impl Into<String>,
    ) -> Self {
        Self {
            type_name: CHECK_RUN_TYPENAME.to_string(),
            name: name.into(),
            status: status.into(),
            conclusion: conclusion.into(),
            ..Self::default()
        }
    }

    /// A status-style entry (`StatusContext`)
    pub fn status_context(context: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            type_name: STATUS_CONTEXT_TYPENAME.to_string(),
            context: context.into(),
            state: state.into(),
            ..Self::default()
        }
    }

    pub fn with_times(
        mut self,
        started_at: Option<DateTime<Utc>>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.started_at = started_at;
        self.completed_at = completed_at;
        self
    }

    pub fn with_details_url(mut self, url: impl Into<String>) -> Self {
        self.details_url = url.into();
        self
    }

    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = url.into();
        self
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC 3339 timestamp; empty, `null` and the zero time (`0001-01-01T00:00:00Z`)
/// all mean "absent".
fn timestamp_or_null<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let parsed = DateTime::parse_from_rfc3339(raw.trim())
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))?
        .with_timezone(&Utc);

    if parsed.year() <= 1 {
        return Ok(None);
    }
    Ok(Some(parsed))
}
