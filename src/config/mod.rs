//! Configuration module for prchecks
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PRCHECKS_*)
//! 3. User config (~/.config/prchecks/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, with_env_overrides_from, ConfigWarning};
pub use types::{ChecksConfig, ColorMode, Config, GithubConfig, OutputConfig};
