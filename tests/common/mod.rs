//! Shared helpers for CLI tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A `prchecks` invocation isolated from the user's config and environment.
pub struct Harness {
    pub config_home: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    /// Write `$XDG_CONFIG_HOME/prchecks/config.toml`
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home.path().join("prchecks");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_prchecks"));
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("BROWSER")
            .env_remove("PRCHECKS_INTERVAL")
            .env_remove("PRCHECKS_COLOR")
            .env_remove("PRCHECKS_HOST")
            .env_remove("PRCHECKS_GH_PATH");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    /// Run against a fixture document instead of `gh`
    pub fn run_fixture(&self, name: &str, args: &[&str]) -> Output {
        let input = fixture(name);
        self.command()
            .arg("--input")
            .arg(&input)
            .args(args)
            .output()
            .unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
