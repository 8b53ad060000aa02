//! System browser launcher

use std::process::{Command, Stdio};

use crate::domain::ports::Browser;
use crate::error::{ChecksError, ChecksResult};

/// Opens URLs with `$BROWSER` or the platform opener.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser {
    /// Value of `$BROWSER`, if set
    browser_env: Option<String>,
}

impl SystemBrowser {
    pub fn new(browser_env: Option<String>) -> Self {
        Self {
            browser_env: browser_env.filter(|b| !b.trim().is_empty()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("BROWSER").ok())
    }

    /// Program and arguments used to open `url`
    pub fn launcher(&self, url: &str) -> (String, Vec<String>) {
        if let Some(browser) = &self.browser_env {
            let mut words = browser.split_whitespace().map(str::to_string);
            if let Some(program) = words.next() {
                let mut args: Vec<String> = words.collect();
                args.push(url.to_string());
                return (program, args);
            }
        }
        platform_opener(url)
    }
}

#[cfg(target_os = "macos")]
fn platform_opener(url: &str) -> (String, Vec<String>) {
    ("open".to_string(), vec![url.to_string()])
}

#[cfg(windows)]
fn platform_opener(url: &str) -> (String, Vec<String>) {
    (
        "cmd".to_string(),
        vec!["/C".to_string(), "start".to_string(), String::new(), url.to_string()],
    )
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_opener(url: &str) -> (String, Vec<String>) {
    ("xdg-open".to_string(), vec![url.to_string()])
}

impl Browser for SystemBrowser {
    fn browse(&self, url: &str) -> ChecksResult<()> {
        let (program, args) = self.launcher(url);
        tracing::info!(%program, url, "opening browser");

        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| ChecksError::Browser {
                message: format!("{program}: {e}"),
            })?;

        if !status.success() {
            return Err(ChecksError::Browser {
                message: format!("{program} exited with status {:?}", status.code()),
            });
        }
        Ok(())
    }
}
