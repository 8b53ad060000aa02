//! Repository reference - `HOST/OWNER/REPO`

use crate::error::{ChecksError, ChecksResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(host: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `OWNER/REPO` or `HOST/OWNER/REPO`.
    pub fn parse(value: &str, default_host: &str) -> ChecksResult<Self> {
        let invalid = || ChecksError::InvalidRepo {
            value: value.to_string(),
        };

        let parts: Vec<&str> = value.trim().trim_end_matches('/').split('/').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid());
        }

        match parts.as_slice() {
            [owner, name] => Ok(Self::new(default_host, *owner, *name)),
            [host, owner, name] => Ok(Self::new(*host, *owner, *name)),
            _ => Err(invalid()),
        }
    }

    /// Extract the repository and number from a pull request web URL
    /// (`https://HOST/OWNER/REPO/pull/NUMBER`).
    pub fn from_pull_request_url(url: &str) -> Option<(Self, u64)> {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))?;
        let mut parts = rest.split('/');

        let host = parts.next().filter(|s| !s.is_empty())?;
        let owner = parts.next().filter(|s| !s.is_empty())?;
        let name = parts.next().filter(|s| !s.is_empty())?;
        if parts.next()? != "pull" {
            return None;
        }
        let number = parts.next()?.parse().ok()?;

        Some((Self::new(host, owner, name), number))
    }

    /// `HOST/OWNER/REPO/pull/NUMBER/checks`, without scheme
    pub fn checks_path(&self, number: u64) -> String {
        format!("{}/{}/{}/pull/{}/checks", self.host, self.owner, self.name, number)
    }

    /// Browser URL of the checks tab
    pub fn checks_url(&self, number: u64) -> String {
        format!("https://{}", self.checks_path(number))
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
