//! Export command: build printable STL meshes.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CliResult, LayoutSelection};

/// Export the keycaps as binary STL
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: LayoutSelection,

    /// Output path for the combined STL (defaults to [layout]_[date].stl)
    #[arg(short, long, value_name = "FILE", conflicts_with = "split")]
    pub output: Option<PathBuf>,

    /// Write one STL per part into this directory instead
    #[arg(long, value_name = "DIR")]
    pub split: Option<PathBuf>,

    /// TrueType font for legends (overrides legend.font_path)
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Skip legend parts
    #[arg(long)]
    pub no_legends: bool,
}

#[cfg(not(feature = "csg"))]
impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        Err(crate::cli::common::CliError::validation(format!(
            "STL export is not available: {} was built without the 'csg' feature. \
             Rebuild with `--features csg`, or use `plan` for a JSON build plan",
            crate::constants::APP_BINARY_NAME
        )))
    }
}

#[cfg(feature = "csg")]
impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        use crate::cli::common::{ensure_parent_dir, load_config, CliError};
        use crate::export::{default_output_path, stl};
        use crate::kernel::MeshKernel;
        use crate::services::build_assembly;
        use tracing::{info, warn};

        let config = load_config()?;
        let layout = self.selection.resolve_valid(&config)?;

        let mut options = config.assembly_options();
        if self.no_legends {
            options.legends = false;
        }

        let mut kernel = MeshKernel::new();
        if options.legends {
            match self.font.as_ref().or(config.legend.font_path.as_ref()) {
                Some(font) => {
                    kernel = kernel
                        .with_font_file(font)
                        .map_err(|e| CliError::io(format!("{e:#}")))?;
                }
                None => warn!(
                    "No legend font configured; exporting caps without legends \
                     (set legend.font_path or pass --font)"
                ),
            }
        }

        let assembly = build_assembly(&kernel, &layout, &options)
            .map_err(|e| CliError::validation(format!("Failed to build meshes: {e:#}")))?;

        if let Some(dir) = &self.split {
            let paths = stl::write_split(&assembly, dir)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
            info!("Wrote {} STL files", paths.len());
            println!("✓ Exported {} parts to: {}", paths.len(), dir.display());
            return Ok(());
        }

        let output_path = self.output.clone().unwrap_or_else(|| {
            default_output_path(&layout, "stl", config.paths.output_dir.as_deref())
        });
        ensure_parent_dir(&output_path)?;

        let parts = stl::write_combined(&assembly, &output_path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        info!("Wrote {} parts into one STL", parts);
        println!("✓ Exported {} parts to: {}", parts, output_path.display());

        Ok(())
    }
}
