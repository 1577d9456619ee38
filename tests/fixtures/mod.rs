//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use uhk80_keycaps::constants::CONFIG_DIR_ENV;
use uhk80_keycaps::models::Layout;
use uhk80_keycaps::services::LayoutService;

/// Path to the compiled binary.
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_uhk80-keycaps")
}

/// Temporary workspace with its own config directory.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Command running in the workspace with an isolated config directory.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.path());
        cmd.env(CONFIG_DIR_ENV, self.config_dir());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to execute command")
    }

    /// Writes `layout` to `file_name` inside the workspace.
    pub fn write_layout(&self, file_name: &str, layout: &Layout) -> PathBuf {
        let path = self.path().join(file_name);
        LayoutService::save(layout, &path).expect("Failed to write layout");
        path
    }

    /// Writes raw text to `file_name` inside the workspace.
    pub fn write_file(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.path().join(file_name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Three keys across two rows, all valid.
pub fn small_layout() -> Layout {
    Layout::from_table(
        "small",
        &[
            (2, 1.0, "Y", 7.0, 1.0, 4.0),
            (2, 1.5, "Bksp", 8.25, 1.0, 4.0),
            (5, 1.0, "Fn", 7.0, 4.0, 4.0),
        ],
    )
}

/// Layout with one error (half-unit key) and one warning (unknown row).
pub fn broken_layout() -> Layout {
    Layout::from_table(
        "broken",
        &[(1, 0.5, "Tiny", 0.0, 0.0, 3.0), (8, 1.0, "Odd", 2.0, 0.0, 3.0)],
    )
}

/// Layout with only a warning (unknown row).
pub fn warning_layout() -> Layout {
    Layout::from_table("warning", &[(7, 1.0, "Odd", 0.0, 0.0, 3.0)])
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}\nstderr: {}",
            stdout(output),
            stderr(output)
        )
    })
}

pub fn assert_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}
