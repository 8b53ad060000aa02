//! Use Case Factory
//!
//! Turns parsed flags and configuration into use case inputs and concrete
//! adapters. This is the dependency injection point for the application.

use std::time::Duration;

use crate::application::ChecksOptions;
use crate::config::Config;
use crate::domain::ports::PullRequestFetcher;
use crate::domain::value_objects::{PullRequestSelector, RepoRef};
use crate::error::ChecksResult;
use crate::infrastructure::{GhCliFetcher, JsonInputFetcher};

use super::cli::Cli;

/// Options for the checks use case; the configured interval only fills in
/// when `--interval` is absent.
pub fn checks_options(cli: &Cli, config: &Config) -> ChecksOptions {
    ChecksOptions::new(PullRequestSelector::parse(cli.selector.as_deref()))
        .with_watch(cli.watch)
        .with_interval(cli.interval.map(Duration::from_secs))
        .with_default_interval(config.default_interval())
}

/// `--repo`, resolved against the configured default host
pub fn repo_override(cli: &Cli, config: &Config) -> ChecksResult<Option<RepoRef>> {
    cli.repo
        .as_deref()
        .map(|value| RepoRef::parse(value, &config.github.host))
        .transpose()
}

/// `--input` wins over the gh CLI.
pub fn create_fetcher(
    cli: &Cli,
    config: &Config,
    repo: Option<RepoRef>,
) -> Box<dyn PullRequestFetcher> {
    match &cli.input {
        Some(path) => Box::new(JsonInputFetcher::new(path.clone())),
        None => Box::new(GhCliFetcher::new(&config.github.gh_path).with_repo(repo)),
    }
}
