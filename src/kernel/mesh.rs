//! Triangle-mesh backend built on `csgrs`.
//!
//! Solids are BSP-backed polygon meshes; booleans are exact enough for
//! printing but slow, so callers should expect seconds per keycap.

use anyhow::{anyhow, Context, Result};
use csgrs::mesh::Mesh;
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use std::path::Path;

use super::{Axis, CadKernel};
use crate::models::Footprint;

/// Number of facets used for cylinders.
pub const DEFAULT_SEGMENTS: usize = 96;

/// Mesh solid without per-polygon metadata.
pub type Solid = Mesh<()>;

/// `csgrs`-backed kernel.
#[derive(Debug, Clone)]
pub struct MeshKernel {
    font: Option<Vec<u8>>,
    segments: usize,
}

impl Default for MeshKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshKernel {
    /// Creates a kernel without a font; legends are skipped.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            font: None,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Loads a TrueType font used for legends.
    pub fn with_font_file(mut self, path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;
        self.font = Some(bytes);
        Ok(self)
    }

    /// Sets the cylinder facet count.
    #[must_use]
    pub const fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }
}

impl CadKernel for MeshKernel {
    type Solid = Solid;

    fn name(&self) -> &'static str {
        "mesh"
    }

    fn tapered_block(&self, bottom: Footprint, top: Footprint, height: f64) -> Result<Solid> {
        let (bw, bd) = (bottom.width / 2.0, bottom.depth / 2.0);
        let (tw, td) = (top.width / 2.0, top.depth / 2.0);
        let points = [
            [-bw, -bd, 0.0],
            [bw, -bd, 0.0],
            [bw, bd, 0.0],
            [-bw, bd, 0.0],
            [-tw, -td, height],
            [tw, -td, height],
            [tw, td, height],
            [-tw, td, height],
        ];
        // Counter-clockwise seen from outside.
        let faces: [&[usize]; 6] = [
            &[0, 3, 2, 1],
            &[4, 5, 6, 7],
            &[0, 1, 5, 4],
            &[1, 2, 6, 5],
            &[2, 3, 7, 6],
            &[3, 0, 4, 7],
        ];

        Mesh::polyhedron(&points, &faces, None)
            .map_err(|e| anyhow!("Failed to build tapered block: {e:?}"))
    }

    fn block(&self, footprint: Footprint, height: f64) -> Result<Solid> {
        self.tapered_block(footprint, footprint, height)
    }

    fn cylinder_y(&self, radius: f64, length: f64) -> Result<Solid> {
        let cylinder = Mesh::cylinder(radius, length, self.segments, None).rotate(90.0, 0.0, 0.0);
        let bounds = cylinder.bounding_box();
        let mid_y = (bounds.mins.y + bounds.maxs.y) / 2.0;
        Ok(cylinder.translate(0.0, -mid_y, 0.0))
    }

    fn text(&self, text: &str, font_size: f64, thickness: f64) -> Result<Option<Solid>> {
        let Some(font) = &self.font else {
            return Ok(None);
        };

        let solid = Sketch::<()>::text(text, font, font_size, None).extrude(thickness);
        if solid.polygons.is_empty() {
            return Ok(None);
        }

        let bounds = solid.bounding_box();
        let mid_x = (bounds.mins.x + bounds.maxs.x) / 2.0;
        let mid_y = (bounds.mins.y + bounds.maxs.y) / 2.0;
        Ok(Some(solid.translate(-mid_x, -mid_y, -bounds.mins.z)))
    }

    fn rotate(&self, solid: Solid, axis: Axis, degrees: f64) -> Solid {
        match axis {
            Axis::X => solid.rotate(degrees, 0.0, 0.0),
            Axis::Y => solid.rotate(0.0, degrees, 0.0),
            Axis::Z => solid.rotate(0.0, 0.0, degrees),
        }
    }

    fn translate(&self, solid: Solid, offset: [f64; 3]) -> Solid {
        solid.translate(offset[0], offset[1], offset[2])
    }

    fn union(&self, a: Solid, b: Solid) -> Solid {
        a.union(&b)
    }

    fn cut(&self, base: Solid, tool: Solid) -> Solid {
        base.difference(&tool)
    }
}
