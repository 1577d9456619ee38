//! Params command: derived geometry for a single key.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, to_json, CliError, CliResult};
use crate::constants::MIN_WIDTH_UNITS;
use crate::models::{KeycapSpec, LayoutEntry};
use crate::services::geometry::{keycap_spec, legend_anchor};
use crate::services::KeyParameters;

/// Print the derived parameters of one keycap
#[derive(Debug, Clone, Args)]
pub struct ParamsArgs {
    /// Profile row (1 = function row, 5 = bottom row)
    #[arg(short, long, value_name = "ROW", allow_negative_numbers = true)]
    pub row: i32,

    /// Key width in keyboard units
    #[arg(short, long, value_name = "UNITS", default_value_t = 1.0)]
    pub width: f64,

    /// Output as JSON, including the full construction spec
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ParamsOutput {
    parameters: KeyParameters,
    spec: KeycapSpec,
    legend_origin: [f64; 3],
}

impl ParamsArgs {
    /// Execute the params command
    pub fn execute(&self) -> CliResult<()> {
        if !self.width.is_finite() || self.width < MIN_WIDTH_UNITS {
            return Err(CliError::validation(format!(
                "Width must be at least {MIN_WIDTH_UNITS}u, got {}",
                self.width
            )));
        }

        let entry = LayoutEntry::new(self.row, self.width, "", 0.0, 0.0, 4.0);
        let parameters = KeyParameters::for_entry(&entry);

        if self.json {
            let config = load_config()?;
            let spec = keycap_spec(self.row, self.width, config.build.stem_cross);
            let output = ParamsOutput {
                legend_origin: legend_anchor(&spec, config.legend.embed).origin,
                parameters,
                spec,
            };
            println!("{}", to_json(&output)?);
        } else {
            print_human(&parameters);
        }

        Ok(())
    }
}

fn print_human(params: &KeyParameters) {
    println!("Row:             {}", params.row);
    if !params.known_row {
        println!("                 (no profile for this row, using row 1)");
    }
    println!("Width:           {}u", params.width_units);
    println!(
        "Bottom:          {:.3} x {:.3} mm",
        params.bottom.width, params.bottom.depth
    );
    println!(
        "Top:             {:.3} x {:.3} mm",
        params.top.width, params.top.depth
    );
    println!("Depth:           {:.3} mm", params.depth);
    println!("Tilt:            {:.2} deg", params.tilt);
    println!("Taper L/R:       {:.3} deg", params.taper_left_right);
    println!("Taper F/B:       {:.3} deg", params.taper_front_back);
}
