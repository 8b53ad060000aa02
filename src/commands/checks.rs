use std::io;
use std::sync::atomic::AtomicBool;

use anyhow::Result;

use prchecks::config::Config;
use prchecks::presentation::{checks_options, create_fetcher, repo_override, Cli};
use prchecks::ui::{RenderMode, TerminalDisplay, UiContext};
use prchecks::ChecksUseCase;

pub fn cmd_checks(cli: &Cli, config: &Config, ui: &UiContext, running: &AtomicBool) -> Result<()> {
    let options = checks_options(cli, config);
    let repo = repo_override(cli, config)?;
    let use_case = ChecksUseCase::new(create_fetcher(cli, config, repo), options)?;

    let stdout = io::stdout();
    let mut display = TerminalDisplay::new(stdout.lock(), RenderMode::for_context(ui));
    use_case.run(&mut display, running)?;
    Ok(())
}
