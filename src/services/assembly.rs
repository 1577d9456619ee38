//! Layout assembly.
//!
//! Turns every layout entry into a placed cap part and, when it has a legend,
//! a placed legend part. Parts come back in layout order whether they were
//! built on one thread or, with the `parallel` feature, on the rayon pool.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::constants::{LEGEND_EMBED, LEGEND_THICKNESS};
use crate::kernel::{Axis, CadKernel};
use crate::models::{cap_part_name, legend_part_name, Layout, LayoutEntry, LegendSpec, RgbColor};
use crate::services::geometry::{grid_position, keycap_spec, legend_anchor};

/// Knobs for building an assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyOptions {
    /// Build legend parts
    pub legends: bool,
    /// Cut the MX cross into the stem boss
    pub stem_cross: bool,
    /// Legend extrusion thickness in millimetres
    pub legend_thickness: f64,
    /// How far legends sink below the top face
    pub legend_embed: f64,
    /// Cap color
    pub cap_color: RgbColor,
    /// Legend color
    pub legend_color: RgbColor,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            legends: true,
            stem_cross: true,
            legend_thickness: LEGEND_THICKNESS,
            legend_embed: LEGEND_EMBED,
            cap_color: RgbColor::CAP,
            legend_color: RgbColor::LEGEND,
        }
    }
}

/// What a part is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartRole {
    /// Keycap body
    Cap,
    /// Raised legend
    Legend,
}

/// A named, colored solid in assembly coordinates.
#[derive(Debug, Clone)]
pub struct Part<S> {
    /// `key_{i}` or `legend_{i}`
    pub name: String,
    /// Cap or legend
    pub role: PartRole,
    /// Index of the layout entry this part belongs to
    pub key_index: usize,
    /// Display color
    pub color: RgbColor,
    /// Kernel solid
    pub solid: S,
}

/// All parts of a layout, in layout order.
#[derive(Debug, Clone)]
pub struct Assembly<S> {
    /// Layout name
    pub layout_name: String,
    /// Parts; each key's cap is followed by its legend, if any
    pub parts: Vec<Part<S>>,
}

impl<S> Assembly<S> {
    /// Number of cap parts.
    #[must_use]
    pub fn cap_count(&self) -> usize {
        self.parts.iter().filter(|p| p.role == PartRole::Cap).count()
    }

    /// Number of legend parts.
    #[must_use]
    pub fn legend_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|p| p.role == PartRole::Legend)
            .count()
    }

    /// Finds a part by name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&Part<S>> {
        self.parts.iter().find(|p| p.name == name)
    }
}

/// Builds the cap and optional legend for one layout entry.
pub fn build_key<K: CadKernel>(
    kernel: &K,
    index: usize,
    entry: &LayoutEntry,
    options: &AssemblyOptions,
) -> Result<Vec<Part<K::Solid>>> {
    let spec = keycap_spec(entry.row, entry.width_units, options.stem_cross);
    let (x, y) = grid_position(entry.grid_x, entry.grid_y);
    let offset = [x, y, 0.0];

    debug!(
        "Building key {} '{}' (row {}, {}u, tilt {:.2})",
        index, entry.legend, entry.row, entry.width_units, spec.tilt
    );

    let mut cap = kernel
        .keycap(&spec)
        .with_context(|| format!("Failed to build keycap {index} ('{}')", entry.legend))?;
    if spec.tilt != 0.0 {
        cap = kernel.rotate(cap, Axis::X, spec.tilt);
    }

    let mut parts = vec![Part {
        name: cap_part_name(index),
        role: PartRole::Cap,
        key_index: index,
        color: options.cap_color,
        solid: kernel.translate(cap, offset),
    }];

    if options.legends && entry.has_legend() {
        let legend = LegendSpec {
            text: entry.legend.clone(),
            font_size: entry.font_size,
            thickness: options.legend_thickness,
            anchor: legend_anchor(&spec, options.legend_embed),
        };

        let solid = kernel
            .legend(&legend)
            .with_context(|| format!("Failed to build legend for key {index} ('{}')", entry.legend))?;

        match solid {
            Some(solid) => parts.push(Part {
                name: legend_part_name(index),
                role: PartRole::Legend,
                key_index: index,
                color: options.legend_color,
                solid: kernel.translate(solid, offset),
            }),
            None => debug!("Kernel '{}' produced no legend for key {}", kernel.name(), index),
        }
    }

    Ok(parts)
}

/// Builds every key of `layout` with `kernel`.
#[cfg(not(feature = "parallel"))]
pub fn build_assembly<K: CadKernel>(
    kernel: &K,
    layout: &Layout,
    options: &AssemblyOptions,
) -> Result<Assembly<K::Solid>> {
    info!(
        "Assembling '{}' ({} keys) with the {} kernel",
        layout.name,
        layout.key_count(),
        kernel.name()
    );

    let per_key = layout
        .keys
        .iter()
        .enumerate()
        .map(|(index, entry)| build_key(kernel, index, entry, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(finish(layout, per_key))
}

/// Builds every key of `layout` with `kernel` on the rayon pool.
#[cfg(feature = "parallel")]
pub fn build_assembly<K: CadKernel + Sync>(
    kernel: &K,
    layout: &Layout,
    options: &AssemblyOptions,
) -> Result<Assembly<K::Solid>> {
    info!(
        "Assembling '{}' ({} keys) with the {} kernel in parallel",
        layout.name,
        layout.key_count(),
        kernel.name()
    );

    // Indexed collect keeps layout order.
    let per_key = layout
        .keys
        .par_iter()
        .enumerate()
        .map(|(index, entry)| build_key(kernel, index, entry, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(finish(layout, per_key))
}

fn finish<S>(layout: &Layout, per_key: Vec<Vec<Part<S>>>) -> Assembly<S> {
    let assembly = Assembly {
        layout_name: layout.name.clone(),
        parts: per_key.into_iter().flatten().collect(),
    };
    info!(
        "Assembled {} caps and {} legends",
        assembly.cap_count(),
        assembly.legend_count()
    );
    assembly
}
