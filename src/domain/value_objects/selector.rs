//! Pull request selector - how the user names the pull request

/// Which pull request to look at
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PullRequestSelector {
    /// The pull request whose head is the current branch
    #[default]
    CurrentBranch,
    /// `123` or `#123`
    Number(u64),
    /// Full web URL of the pull request
    Url(String),
    /// Head branch name
    Branch(String),
}

impl PullRequestSelector {
    pub fn parse(arg: Option<&str>) -> Self {
        let Some(raw) = arg.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::CurrentBranch;
        };

        let digits = raw.strip_prefix('#').unwrap_or(raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = digits.parse() {
                return Self::Number(number);
            }
        }

        if raw.starts_with("https://") || raw.starts_with("http://") {
            return Self::Url(raw.to_string());
        }

        Self::Branch(raw.to_string())
    }

    /// Positional argument understood by `gh pr view`, if any
    pub fn to_arg(&self) -> Option<String> {
        match self {
            Self::CurrentBranch => None,
            Self::Number(n) => Some(n.to_string()),
            Self::Url(url) => Some(url.clone()),
            Self::Branch(branch) => Some(branch.clone()),
        }
    }
}

impl std::fmt::Display for PullRequestSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CurrentBranch => f.write_str("current branch"),
            Self::Number(n) => write!(f, "#{n}"),
            Self::Url(url) => f.write_str(url),
            Self::Branch(branch) => f.write_str(branch),
        }
    }
}
