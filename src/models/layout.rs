//! Keyboard layout data model: an ordered list of physical keys.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FONT_SIZE;

/// One physical key: its row class, width, label and grid position.
///
/// Grid coordinates are in keyboard units with x growing right and y growing
/// down, as in the source layout tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Profile row (1 = function row, 5 = bottom row)
    pub row: i32,
    /// Key width in keyboard units
    #[serde(rename = "width", default = "default_width")]
    pub width_units: f64,
    /// Legend text printed on the cap
    #[serde(default)]
    pub legend: String,
    /// Grid X position in keyboard units
    #[serde(rename = "x")]
    pub grid_x: f64,
    /// Grid Y position in keyboard units
    #[serde(rename = "y")]
    pub grid_y: f64,
    /// Legend font size
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_width() -> f64 {
    1.0
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

impl LayoutEntry {
    /// Creates a new entry.
    pub fn new(
        row: i32,
        width_units: f64,
        legend: impl Into<String>,
        grid_x: f64,
        grid_y: f64,
        font_size: f64,
    ) -> Self {
        Self {
            row,
            width_units,
            legend: legend.into(),
            grid_x,
            grid_y,
            font_size,
        }
    }

    /// Returns true if the legend has printable content.
    #[must_use]
    pub fn has_legend(&self) -> bool {
        !self.legend.trim().is_empty()
    }

    /// Horizontal extent `[left, right)` in keyboard units, assuming `grid_x`
    /// is the key centre.
    #[must_use]
    pub fn span_units(&self) -> (f64, f64) {
        let half = self.width_units / 2.0;
        (self.grid_x - half, self.grid_x + half)
    }
}

/// A named, ordered keyboard layout.
///
/// Order is insertion order; it only matters for the stable part names
/// produced when the layout is turned into an assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Layout name (used for output file names)
    pub name: String,
    /// Keys in insertion order
    #[serde(default)]
    pub keys: Vec<LayoutEntry>,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    /// Builds a layout from `(row, width, legend, x, y, font_size)` tuples.
    pub fn from_table(name: impl Into<String>, table: &[(i32, f64, &str, f64, f64, f64)]) -> Self {
        let keys = table
            .iter()
            .map(|&(row, width, legend, x, y, font_size)| {
                LayoutEntry::new(row, width, legend, x, y, font_size)
            })
            .collect();

        Self {
            name: name.into(),
            keys,
        }
    }

    /// Number of keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the layout has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Finds the first key with the given legend.
    #[must_use]
    pub fn find_by_legend(&self, legend: &str) -> Option<(usize, &LayoutEntry)> {
        self.keys
            .iter()
            .enumerate()
            .find(|(_, key)| key.legend == legend)
    }

    /// Name of the filesystem-safe stem derived from the layout name.
    #[must_use]
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .name
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();

        if stem.is_empty() {
            "layout".to_string()
        } else {
            stem
        }
    }
}

/// Stable identifier of the cap part built from key `index`.
#[must_use]
pub fn cap_part_name(index: usize) -> String {
    format!("key_{index}")
}

/// Stable identifier of the legend part built from key `index`.
#[must_use]
pub fn legend_part_name(index: usize) -> String {
    format!("legend_{index}")
}
