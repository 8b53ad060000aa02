//! Command handlers

mod checks;
mod web;

use std::io;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use prchecks::config::{user_config_path, ColorMode, Config};
use prchecks::presentation::Cli;
use prchecks::ui::error::write_error;
use prchecks::ui::output::write_config_warnings;
use prchecks::ui::UiContext;
use prchecks::ChecksError;

/// Run the command line and map the result to an exit status.
pub fn run(cli: &Cli) -> ExitCode {
    let (config, warnings) = match Config::load_or_default() {
        Ok(loaded) => loaded,
        Err(e) => {
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, ColorMode::Auto);
            return fail(&ui, e.into());
        }
    };

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, config.output.color);
    if !warnings.is_empty() {
        let _ = write_config_warnings(&mut io::stderr().lock(), &warnings, ui.color);
    }
    tracing::debug!(config_path = ?user_config_path(), ?ui, "starting");

    let result = if cli.web {
        web::cmd_web(cli, &config, &ui)
    } else {
        let running = if cli.watch {
            install_interrupt_handler()
        } else {
            Arc::new(AtomicBool::new(true))
        };
        checks::cmd_checks(cli, &config, &ui, &running)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&ui, e),
    }
}

/// Ctrl+C clears the flag instead of killing the process, so the watch loop
/// can restore the screen before exiting.
fn install_interrupt_handler() -> Arc<AtomicBool> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    }) {
        tracing::warn!("failed to install Ctrl+C handler: {}", e);
    }

    running
}

fn fail(ui: &UiContext, err: anyhow::Error) -> ExitCode {
    let checks_error = err.downcast_ref::<ChecksError>();
    let silent = checks_error.is_some_and(ChecksError::is_silent);
    let code = checks_error.map_or(1, ChecksError::exit_code);

    if !silent {
        let _ = write_error(&mut io::stderr().lock(), &err, ui.json, ui.color);
    }
    ExitCode::from(code)
}
