//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChecksError, ChecksResult};

use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ChecksResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ChecksError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.checks.interval == 0 {
        return Err(ChecksError::Config {
            file: path.to_path_buf(),
            message: "checks.interval must be at least 1 second".to_string(),
        });
    }

    let warnings = unknown_paths
        .iter()
        .map(|dotted| unknown_key_warning(path, &content, dotted))
        .collect();

    Ok((config, warnings))
}

/// Load the user config, or defaults when there is none, then apply env
/// overrides.
///
/// A config file that exists but cannot be parsed is an error.
pub fn load_or_default() -> ChecksResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match user_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading user config");
            load_with_warnings(&path)?
        }
        _ => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// `$XDG_CONFIG_HOME/prchecks/config.toml`, falling back to the platform
/// config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("prchecks").join("config.toml"))
}

/// Apply environment variable overrides (PRCHECKS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn with_env_overrides_from<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // PRCHECKS_INTERVAL
    if let Some(value) = get_env("PRCHECKS_INTERVAL") {
        match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => config.checks.interval = secs,
            _ => tracing::warn!(%value, "ignoring invalid PRCHECKS_INTERVAL"),
        }
    }

    // PRCHECKS_COLOR
    if let Some(value) = get_env("PRCHECKS_COLOR") {
        match ColorMode::parse(&value) {
            Some(mode) => config.output.color = mode,
            None => tracing::warn!(%value, "ignoring invalid PRCHECKS_COLOR"),
        }
    }

    // PRCHECKS_HOST
    if let Some(host) = get_env("PRCHECKS_HOST").filter(|h| !h.trim().is_empty()) {
        config.github.host = host.trim().to_string();
    }

    // PRCHECKS_GH_PATH
    if let Some(path) = get_env("PRCHECKS_GH_PATH").filter(|p| !p.trim().is_empty()) {
        config.github.gh_path = path;
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn unknown_key_warning(file: &Path, content: &str, dotted: &str) -> ConfigWarning {
    let (table, key) = match dotted.rsplit_once('.') {
        Some((table, key)) => (Some(table), key),
        None => (None, dotted),
    };
    ConfigWarning {
        key: key.to_string(),
        file: file.to_path_buf(),
        line: key_line(content, key),
        suggestion: suggest_key(table, key),
    }
}

/// 1-based line on which `key` is assigned or opened as a table.
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start().trim_start_matches('[');
            line.strip_prefix(key)
                .is_some_and(|rest| rest.starts_with([' ', '=', ']', '\t']))
        })
        .map(|idx| idx + 1)
}

const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("checks", &["interval"]),
    ("output", &["color"]),
    ("github", &["host", "gh_path"]),
];

/// Closest known key within edit distance 2; `table` is `None` at the top
/// level.
pub(super) fn suggest_key(table: Option<&str>, unknown: &str) -> Option<String> {
    let candidates: Vec<&str> = match table {
        None => KNOWN_KEYS.iter().map(|(name, _)| *name).collect(),
        Some(table) => KNOWN_KEYS
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, keys)| keys.to_vec())
            .unwrap_or_default(),
    };

    candidates
        .into_iter()
        .map(|candidate| (edit_distance(unknown, candidate), candidate))
        .filter(|(dist, _)| *dist <= 2)
        .min()
        .map(|(_, candidate)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}
