//! Shared types for CLI command handlers.

use clap::Args;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::config::Config;
use crate::models::Layout;
use crate::services::{validate_layout, LayoutService};

/// Process exit codes.
pub struct ExitCode;

impl ExitCode {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Invalid input, failed validation or any other non-I/O failure
    pub const VALIDATION: i32 = 1;
    /// File system failure
    pub const IO: i32 = 2;
}

/// Error returned by CLI commands, carrying the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code
    pub code: i32,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IO,
            message: message.into(),
        }
    }

    /// Validation or general failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::VALIDATION,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of every CLI command.
pub type CliResult<T> = Result<T, CliError>;

/// `--layout` option shared by the layout-consuming commands.
#[derive(Debug, Clone, Default, Args)]
pub struct LayoutSelection {
    /// Built-in layout name (top-row, right-half) or path to a TOML/JSON layout file
    #[arg(short, long, value_name = "NAME|FILE")]
    pub layout: Option<String>,
}

impl LayoutSelection {
    /// Resolves the selected layout, falling back to `build.default_layout`.
    ///
    /// Any failure to produce a layout is reported as an I/O error.
    pub fn resolve(&self, config: &Config) -> CliResult<Layout> {
        let name = self
            .layout
            .as_deref()
            .unwrap_or(config.build.default_layout.as_str());

        LayoutService::resolve(name)
            .map_err(|e| CliError::io(format!("Failed to load layout '{name}': {e:#}")))
    }

    /// Resolves the selected layout and rejects it if validation finds errors.
    ///
    /// Warnings are logged and do not stop the build.
    pub fn resolve_valid(&self, config: &Config) -> CliResult<Layout> {
        let layout = self.resolve(config)?;
        let report = validate_layout(&layout);

        if !report.is_valid() {
            return Err(CliError::validation(format!(
                "Layout validation failed:\n{}",
                report.format_message()
            )));
        }
        for issue in &report.warnings {
            warn!("{issue}");
        }

        Ok(layout)
    }
}

/// Loads the configuration, mapping failures to a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Creates the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> CliResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).map_err(|e| {
            CliError::io(format!("Failed to create directory {}: {e}", parent.display()))
        }),
        _ => Ok(()),
    }
}

/// Serializes `value` as pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::validation(format!("Failed to serialize JSON: {e}")))
}
