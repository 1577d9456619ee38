//! CAD kernel boundary.
//!
//! The geometry service only computes parameters; turning them into solids is
//! delegated to an implementation of [`CadKernel`]. Implementors supply a
//! handful of primitives and transforms, and the provided [`CadKernel::keycap`]
//! and [`CadKernel::legend`] methods compose them the same way for every
//! backend.
//!
//! Two backends ship with the crate:
//! - [`plan::PlanKernel`] records the calls as a serializable tree.
//! - `mesh::MeshKernel` (feature `csg`) builds triangle meshes with `csgrs`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Footprint, KeycapSpec, LegendSpec};

#[cfg(feature = "csg")]
pub mod mesh;
pub mod plan;

pub use plan::{PlanKernel, PlannedSolid};

#[cfg(feature = "csg")]
pub use mesh::MeshKernel;

/// Extra length added to cutting tools so they never share a face with the body.
pub const CUT_MARGIN: f64 = 0.01;

/// Rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis (row tilt)
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

/// Solid-modelling backend.
///
/// All primitives are built in the keycap frame: centred on the origin in XY
/// with their base at z = 0 unless stated otherwise.
pub trait CadKernel {
    /// Opaque solid handle.
    type Solid: Clone + Send + Debug;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Loft from `bottom` at z = 0 to `top` at z = `height`.
    fn tapered_block(&self, bottom: Footprint, top: Footprint, height: f64) -> Result<Self::Solid>;

    /// Straight box of the given footprint and height.
    fn block(&self, footprint: Footprint, height: f64) -> Result<Self::Solid>;

    /// Cylinder with its axis along Y, centred on the origin.
    fn cylinder_y(&self, radius: f64, length: f64) -> Result<Self::Solid>;

    /// Extruded text centred in XY, from z = 0 to z = `thickness`.
    ///
    /// Returns `None` when the backend cannot render text.
    fn text(&self, text: &str, font_size: f64, thickness: f64) -> Result<Option<Self::Solid>>;

    /// Rotates about an axis through the origin.
    fn rotate(&self, solid: Self::Solid, axis: Axis, degrees: f64) -> Self::Solid;

    /// Translates by `offset`.
    fn translate(&self, solid: Self::Solid, offset: [f64; 3]) -> Self::Solid;

    /// Boolean union.
    fn union(&self, a: Self::Solid, b: Self::Solid) -> Self::Solid;

    /// Boolean difference `base - tool`.
    fn cut(&self, base: Self::Solid, tool: Self::Solid) -> Self::Solid;

    /// Builds an untilted keycap: hollow tapered shell, dished top and stem socket.
    fn keycap(&self, spec: &KeycapSpec) -> Result<Self::Solid> {
        let outer = self.tapered_block(spec.bottom, spec.top, spec.height)?;

        let inset = 2.0 * spec.wall;
        let inner_height = spec.height - spec.roof;
        let inner = self.tapered_block(
            Footprint::new(spec.bottom.width - inset, spec.bottom.depth - inset),
            Footprint::new(spec.top.width - inset, spec.top.depth - inset),
            inner_height + CUT_MARGIN,
        )?;
        let inner = self.translate(inner, [0.0, 0.0, -CUT_MARGIN]);
        let mut body = self.cut(outer, inner);

        let dish = self.cylinder_y(spec.dish.radius, spec.bottom.depth + 2.0 * CUT_MARGIN)?;
        let dish = self.translate(
            dish,
            [0.0, 0.0, spec.height + spec.dish.radius - spec.dish.depth],
        );
        body = self.cut(body, dish);

        // The boss always reaches the roof so it stays attached to the shell.
        let boss_length = spec.stem.boss_height.max(inner_height) + CUT_MARGIN;
        let boss = self.block(spec.stem.boss, boss_length)?;
        body = self.union(body, boss);

        if spec.stem.cross_enabled {
            let horizontal = self.block(spec.stem.cross_horizontal, spec.stem.throw + CUT_MARGIN)?;
            let vertical = self.block(spec.stem.cross_vertical, spec.stem.throw + CUT_MARGIN)?;
            let cross = self.union(horizontal, vertical);
            let cross = self.translate(cross, [0.0, 0.0, -CUT_MARGIN]);
            body = self.cut(body, cross);
        }

        Ok(body)
    }

    /// Builds a legend on the tilted top face described by `legend.anchor`.
    fn legend(&self, legend: &LegendSpec) -> Result<Option<Self::Solid>> {
        let Some(text) = self.text(&legend.text, legend.font_size, legend.thickness)? else {
            return Ok(None);
        };

        let text = if legend.anchor.tilt == 0.0 {
            text
        } else {
            self.rotate(text, Axis::X, legend.anchor.tilt)
        };

        Ok(Some(self.translate(text, legend.anchor.origin)))
    }
}
