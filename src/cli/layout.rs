//! Layout command: list the keys of a layout with their placement.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, to_json, CliResult, LayoutSelection};
use crate::services::geometry::grid_position;
use crate::services::LayoutService;

/// List the keys of a layout
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub selection: LayoutSelection,

    /// List the built-in layout names instead
    #[arg(long)]
    pub builtin: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct KeyOutput {
    index: usize,
    legend: String,
    row: i32,
    width: f64,
    x: f64,
    y: f64,
    font_size: f64,
    offset_mm: (f64, f64),
}

#[derive(Serialize)]
struct LayoutOutput {
    name: String,
    key_count: usize,
    keys: Vec<KeyOutput>,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> CliResult<()> {
        if self.builtin {
            let names = LayoutService::builtin_names();
            if self.json {
                println!("{}", to_json(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
            return Ok(());
        }

        let config = load_config()?;
        let layout = self.selection.resolve(&config)?;

        let keys: Vec<KeyOutput> = layout
            .keys
            .iter()
            .enumerate()
            .map(|(index, key)| KeyOutput {
                index,
                legend: key.legend.clone(),
                row: key.row,
                width: key.width_units,
                x: key.grid_x,
                y: key.grid_y,
                font_size: key.font_size,
                offset_mm: grid_position(key.grid_x, key.grid_y),
            })
            .collect();

        if self.json {
            let output = LayoutOutput {
                name: layout.name.clone(),
                key_count: keys.len(),
                keys,
            };
            println!("{}", to_json(&output)?);
            return Ok(());
        }

        println!("Layout: {} ({} keys)", layout.name, keys.len());
        println!();
        println!(
            "{:>3}  {:<10} {:>3} {:>6} {:>8} {:>8} {:>10} {:>10}",
            "#", "Legend", "Row", "Width", "X (u)", "Y (u)", "X (mm)", "Y (mm)"
        );
        for key in &keys {
            println!(
                "{:>3}  {:<10} {:>3} {:>6} {:>8} {:>8} {:>10.3} {:>10.3}",
                key.index,
                key.legend,
                key.row,
                key.width,
                key.x,
                key.y,
                key.offset_mm.0,
                key.offset_mm.1
            );
        }

        Ok(())
    }
}
