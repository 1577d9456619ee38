//! Validation command for layouts.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, to_json, CliError, CliResult, LayoutSelection};
use crate::services::validation::ValidationIssue;
use crate::services::validate_layout;

/// Validate a layout for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub selection: LayoutSelection,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct ValidationMessage {
    severity: &'static str,
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_index: Option<usize>,
    message: String,
}

impl ValidationMessage {
    fn from_issue(severity: &'static str, issue: &ValidationIssue) -> Self {
        Self {
            severity,
            kind: format!("{:?}", issue.kind),
            key_index: issue.key_index,
            message: issue.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ValidationResponse {
    layout: String,
    key_count: usize,
    valid: bool,
    error_count: usize,
    warning_count: usize,
    messages: Vec<ValidationMessage>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let layout = self.selection.resolve(&config)?;
        let report = validate_layout(&layout);

        let mut messages: Vec<ValidationMessage> = report
            .errors
            .iter()
            .map(|e| ValidationMessage::from_issue("error", e))
            .collect();
        messages.extend(
            report
                .warnings
                .iter()
                .map(|w| ValidationMessage::from_issue("warning", w)),
        );

        let response = ValidationResponse {
            layout: layout.name.clone(),
            key_count: layout.key_count(),
            valid: report.is_valid(),
            error_count: report.errors.len(),
            warning_count: report.warnings.len(),
            messages,
        };

        if self.json {
            println!("{}", to_json(&response)?);
        } else if report.is_valid() && report.warnings.is_empty() {
            println!("✓ Layout '{}' is valid ({} keys)", layout.name, layout.key_count());
        } else {
            print!("{}", report.format_message());
        }

        if !report.is_valid() {
            return Err(CliError::validation(format!(
                "Layout '{}' has {} validation errors",
                layout.name,
                report.errors.len()
            )));
        }

        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation(format!(
                "Layout '{}' has {} warnings (strict mode)",
                layout.name,
                report.warnings.len()
            )));
        }

        Ok(())
    }
}
