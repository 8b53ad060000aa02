//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ChecksResult;

use super::loader::{self, ConfigWarning};

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// Default `--watch` interval in seconds
    #[serde(default = "default_interval")]
    pub interval: u64,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
        }
    }
}

fn default_interval() -> u64 {
    10
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// GitHub access configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Host assumed for `--repo OWNER/REPO`
    #[serde(default = "default_host")]
    pub host: String,

    /// `gh` executable
    #[serde(default = "default_gh_path")]
    pub gh_path: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            gh_path: default_gh_path(),
        }
    }
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_gh_path() -> String {
    "gh".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub github: GithubConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ChecksResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ChecksResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user config (if any) and apply environment overrides
    pub fn load_or_default() -> ChecksResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (PRCHECKS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Interval used by `--watch` when `--interval` is not given
    pub fn default_interval(&self) -> Duration {
        Duration::from_secs(self.checks.interval)
    }
}
