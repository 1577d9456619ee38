//! Plan command: build the assembly with the plan kernel and write it as JSON.

use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::cli::common::{
    ensure_parent_dir, load_config, to_json, CliError, CliResult, LayoutSelection,
};
use crate::export::plan_document;
use crate::kernel::PlanKernel;
use crate::services::build_assembly;

/// Write the keycap build plan as JSON
#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selection: LayoutSelection,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip legend parts
    #[arg(long)]
    pub no_legends: bool,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let layout = self.selection.resolve_valid(&config)?;

        let mut options = config.assembly_options();
        if self.no_legends {
            options.legends = false;
        }

        let assembly = build_assembly(&PlanKernel, &layout, &options)
            .map_err(|e| CliError::validation(format!("Failed to build plan: {e:#}")))?;
        let json = to_json(&plan_document(&layout, &assembly, &options))?;

        match &self.output {
            Some(path) => {
                ensure_parent_dir(path)?;
                fs::write(path, json).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                info!("Wrote plan for {} parts to {}", assembly.parts.len(), path.display());
                println!("✓ Wrote build plan to: {}", path.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
