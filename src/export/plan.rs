//! JSON build plan for a plan-kernel assembly.

use serde::Serialize;

use crate::constants::APP_BINARY_NAME;
use crate::kernel::PlannedSolid;
use crate::models::{Layout, RgbColor};
use crate::services::{Assembly, AssemblyOptions, PartRole};

/// Who produced the document.
#[derive(Debug, Clone, Serialize)]
pub struct Generator {
    /// Binary name
    pub name: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// Color in both notations.
#[derive(Debug, Clone, Serialize)]
pub struct PlanColor {
    /// `#RRGGBB`
    pub hex: String,
    /// Unit-range channels
    pub rgb: [f32; 3],
}

impl From<RgbColor> for PlanColor {
    fn from(color: RgbColor) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color.to_array(),
        }
    }
}

/// One part of the plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanPart {
    /// `key_{i}` or `legend_{i}`
    pub name: String,
    /// Cap or legend
    pub role: PartRole,
    /// Layout entry index
    pub key_index: usize,
    /// Legend text of the entry
    pub legend: String,
    /// Display color
    pub color: PlanColor,
    /// Operation tree
    pub solid: PlannedSolid,
}

/// Settings the plan was built with.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSettings {
    /// Legend parts were requested
    pub legends: bool,
    /// MX cross was cut
    pub stem_cross: bool,
    /// Legend thickness in millimetres
    pub legend_thickness: f64,
    /// Legend embed in millimetres
    pub legend_embed: f64,
}

/// Complete plan document.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDocument {
    /// Producer
    pub generator: Generator,
    /// RFC 3339 creation time
    pub generated_at: String,
    /// Layout name
    pub layout: String,
    /// Number of layout entries
    pub key_count: usize,
    /// Lengths are millimetres, angles degrees
    pub units: &'static str,
    /// Build settings
    pub settings: PlanSettings,
    /// Parts in layout order
    pub parts: Vec<PlanPart>,
}

/// Builds the serializable plan document for `assembly`.
#[must_use]
pub fn plan_document(
    layout: &Layout,
    assembly: &Assembly<PlannedSolid>,
    options: &AssemblyOptions,
) -> PlanDocument {
    let parts = assembly
        .parts
        .iter()
        .map(|part| PlanPart {
            name: part.name.clone(),
            role: part.role,
            key_index: part.key_index,
            legend: layout
                .keys
                .get(part.key_index)
                .map(|k| k.legend.clone())
                .unwrap_or_default(),
            color: part.color.into(),
            solid: part.solid.clone(),
        })
        .collect();

    PlanDocument {
        generator: Generator {
            name: APP_BINARY_NAME,
            version: env!("CARGO_PKG_VERSION"),
        },
        generated_at: chrono::Local::now().to_rfc3339(),
        layout: assembly.layout_name.clone(),
        key_count: layout.key_count(),
        units: "mm",
        settings: PlanSettings {
            legends: options.legends,
            stem_cross: options.stem_cross,
            legend_thickness: options.legend_thickness,
            legend_embed: options.legend_embed,
        },
        parts,
    }
}
