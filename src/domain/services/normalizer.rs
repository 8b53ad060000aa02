//! Check Record Normalizer
//!
//! Maps the two upstream entry shapes onto `CheckRecord`.

use crate::domain::entities::{
    CheckRecord, CheckState, PullRequest, RawCheck, CHECK_RUN_TYPENAME, STATUS_CONTEXT_TYPENAME,
};
use crate::error::{ChecksError, ChecksResult};

/// Identity used when upstream sends neither a name nor a context
pub const UNNAMED_CHECK: &str = "(unnamed check)";

/// Normalize all checks reported on the pull request's head commit.
///
/// Fails with `NoCommit` when there is no head commit and with `NoChecks`
/// when the head commit reports nothing.
pub fn normalize(pr: &PullRequest) -> ChecksResult<Vec<CheckRecord>> {
    let commit = pr.head_commit.as_ref().ok_or(ChecksError::NoCommit)?;
    if commit.checks.is_empty() {
        return Err(ChecksError::NoChecks {
            branch: pr.head_ref_name.clone(),
        });
    }

    Ok(commit.checks.iter().map(normalize_check).collect())
}

/// Normalize a single upstream entry.
pub fn normalize_check(raw: &RawCheck) -> CheckRecord {
    if is_status_context(raw) {
        CheckRecord {
            identity: identity(&raw.context, &raw.name),
            state: CheckState::Status {
                state: raw.state.trim().to_ascii_lowercase(),
            },
            started_at: raw.started_at,
            completed_at: raw.completed_at,
            details_link: first_non_empty(&raw.target_url, &raw.details_url),
        }
    } else {
        CheckRecord {
            identity: identity(&raw.name, &raw.context),
            state: CheckState::Run {
                status: raw.status.trim().to_ascii_lowercase(),
                conclusion: raw.conclusion.trim().to_ascii_lowercase(),
            },
            started_at: raw.started_at,
            completed_at: raw.completed_at,
            details_link: first_non_empty(&raw.details_url, &raw.target_url),
        }
    }
}

fn is_status_context(raw: &RawCheck) -> bool {
    match raw.type_name.as_str() {
        STATUS_CONTEXT_TYPENAME => true,
        CHECK_RUN_TYPENAME => false,
        _ => !raw.context.is_empty() || !raw.state.is_empty(),
    }
}

fn identity(primary: &str, fallback: &str) -> String {
    let name = first_non_empty(primary.trim(), fallback.trim());
    if name.is_empty() {
        UNNAMED_CHECK.to_string()
    } else {
        name
    }
}

fn first_non_empty(primary: &str, fallback: &str) -> String {
    if primary.is_empty() {
        fallback.to_string()
    } else {
        primary.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CheckKind;

    #[test]
    fn normalize_without_commit_is_no_commit() {
        let pr = PullRequest::new(123, "master");
        assert!(matches!(normalize(&pr), Err(ChecksError::NoCommit)));
    }

    #[test]
    fn normalize_without_checks_names_branch() {
        let pr = PullRequest::new(123, "master").with_head_commit("abc", Vec::new());
        let err = normalize(&pr).unwrap_err();
        assert_eq!(err.to_string(), "no checks reported on the 'master' branch");
    }

    #[test]
    fn check_run_uses_name_and_details_url() {
        let raw = RawCheck::check_run("cool tests", "COMPLETED", "SUCCESS")
            .with_details_url("https://ci/1")
            .with_target_url("https://other");
        let record = normalize_check(&raw);

        assert_eq!(record.identity, "cool tests");
        assert_eq!(record.kind(), CheckKind::Run);
        assert_eq!(
            record.state,
            CheckState::Run {
                status: "completed".to_string(),
                conclusion: "success".to_string()
            }
        );
        assert_eq!(record.details_link, "https://ci/1");
    }

    #[test]
    fn status_context_uses_context_and_target_url() {
        let raw = RawCheck::status_context("ci/jenkins", "FAILURE").with_target_url("https://j/2");
        let record = normalize_check(&raw);

        assert_eq!(record.identity, "ci/jenkins");
        assert_eq!(record.kind(), CheckKind::Status);
        assert_eq!(record.details_link, "https://j/2");
    }

    #[test]
    fn unknown_typename_is_inferred_from_fields() {
        let mut raw = RawCheck::status_context("legacy", "PENDING");
        raw.type_name = String::new();
        assert_eq!(normalize_check(&raw).kind(), CheckKind::Status);

        let mut raw = RawCheck::check_run("build", "QUEUED", "");
        raw.type_name = "SomethingNew".to_string();
        assert_eq!(normalize_check(&raw).kind(), CheckKind::Run);
    }

    #[test]
    fn identity_is_never_empty() {
        let raw = RawCheck::check_run("", "COMPLETED", "SUCCESS");
        assert_eq!(normalize_check(&raw).identity, UNNAMED_CHECK);

        let raw = RawCheck::status_context("  ", "SUCCESS");
        assert_eq!(normalize_check(&raw).identity, UNNAMED_CHECK);
    }
}
