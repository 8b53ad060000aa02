use std::io;

use anyhow::Result;

use prchecks::application::open_in_browser;
use prchecks::config::Config;
use prchecks::infrastructure::SystemBrowser;
use prchecks::presentation::{checks_options, create_fetcher, repo_override, Cli};
use prchecks::ui::UiContext;
use prchecks::PullRequestSelector;

pub fn cmd_web(cli: &Cli, config: &Config, ui: &UiContext) -> Result<()> {
    // Flag combinations are rejected the same way in every mode
    checks_options(cli, config).validate()?;
    let repo = repo_override(cli, config)?;
    let fetcher = create_fetcher(cli, config, repo.clone());
    let selector = PullRequestSelector::parse(cli.selector.as_deref());

    let stderr = io::stderr();
    open_in_browser(
        fetcher.as_ref(),
        &SystemBrowser::from_env(),
        &selector,
        repo.as_ref(),
        &mut stderr.lock(),
        ui.stderr_interactive(),
    )?;
    Ok(())
}
