//! Markdown parameter sheet.
//!
//! One table row per key with every derived dimension, followed by the row
//! profile table, so a layout can be checked against the printed caps without
//! opening a CAD tool.

use std::fmt::Write as _;

use crate::models::{Layout, RowProfile};
use crate::services::geometry::row_depth_and_tilt;
use crate::services::KeyParameters;

/// Generates the markdown parameter sheet for `layout`.
///
/// # Example
///
/// ```
/// use uhk80_keycaps::export::generate_parameter_sheet;
/// use uhk80_keycaps::services::LayoutService;
///
/// let layout = LayoutService::builtin("top-row").unwrap();
/// let sheet = generate_parameter_sheet(&layout);
/// assert!(sheet.contains("| F7 |"));
/// ```
#[must_use]
pub fn generate_parameter_sheet(layout: &Layout) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {} keycap parameters\n", layout.name);
    let _ = writeln!(
        output,
        "Generated {}. {} keys. Lengths in mm, angles in degrees.\n",
        chrono::Local::now().format("%Y-%m-%d"),
        layout.key_count()
    );

    output.push_str("## Keys\n\n");
    output.push_str(
        "| # | Legend | Row | Width (u) | Bottom (mm) | Top (mm) | Depth | Tilt | Taper L/R | Taper F/B | X | Y |\n",
    );
    output.push_str("|---|---|---|---|---|---|---|---|---|---|---|---|\n");

    for (index, entry) in layout.keys.iter().enumerate() {
        let params = KeyParameters::for_entry(entry);
        let row = if params.known_row {
            params.row.to_string()
        } else {
            format!("{} (as 1)", params.row)
        };
        let legend = if entry.has_legend() {
            entry.legend.replace('|', "\\|")
        } else {
            "-".to_string()
        };

        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {:.2} x {:.2} | {:.2} x {:.2} | {:.2} | {:.1} | {:.2} | {:.2} | {:.3} | {:.3} |",
            index,
            legend,
            row,
            params.width_units,
            params.bottom.width,
            params.bottom.depth,
            params.top.width,
            params.top.depth,
            params.depth,
            params.tilt,
            params.taper_left_right,
            params.taper_front_back,
            params.offset.0,
            params.offset.1,
        );
    }

    output.push_str("\n## Row profiles\n\n");
    output.push_str("| Row | Base depth | Base tilt | Depth | Net tilt |\n");
    output.push_str("|---|---|---|---|---|\n");
    for row in RowProfile::known_rows() {
        if let Some(profile) = RowProfile::lookup(row) {
            let (depth, tilt) = row_depth_and_tilt(row);
            let _ = writeln!(
                output,
                "| {} | {:.2} | {:.1} | {:.2} | {:.1} |",
                row, profile.base_depth, profile.top_tilt, depth, tilt
            );
        }
    }

    output
}
