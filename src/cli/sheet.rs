//! Sheet command: markdown parameter sheet for a layout.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{ensure_parent_dir, load_config, CliError, CliResult, LayoutSelection};
use crate::export::{default_output_path, generate_parameter_sheet};

/// Write a markdown parameter sheet for a layout
#[derive(Debug, Clone, Args)]
pub struct SheetArgs {
    #[command(flatten)]
    pub selection: LayoutSelection,

    /// Output path (defaults to [layout]_[date].md in the configured output directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

impl SheetArgs {
    /// Execute the sheet command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let layout = self.selection.resolve_valid(&config)?;
        let sheet = generate_parameter_sheet(&layout);

        if self.stdout {
            print!("{sheet}");
            return Ok(());
        }

        let output_path = self.output.clone().unwrap_or_else(|| {
            default_output_path(&layout, "md", config.paths.output_dir.as_deref())
        });

        ensure_parent_dir(&output_path)?;
        fs::write(&output_path, sheet)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("✓ Exported parameter sheet to: {}", output_path.display());

        Ok(())
    }
}
