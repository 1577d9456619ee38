//! Build-plan backend.
//!
//! [`PlanKernel`] performs no geometry at all: every kernel call becomes a
//! node in a [`PlannedSolid`] tree. The tree serializes to JSON, so it doubles
//! as a portable recipe for an external CAD tool and as the test double for
//! everything above the kernel boundary.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{Axis, CadKernel};
use crate::models::Footprint;

/// One recorded kernel operation and its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlannedSolid {
    /// Loft between two centred rectangles
    TaperedBlock {
        /// Footprint at z = 0
        bottom: Footprint,
        /// Footprint at z = height
        top: Footprint,
        /// Loft height
        height: f64,
    },
    /// Straight box
    Block {
        /// Footprint
        footprint: Footprint,
        /// Height
        height: f64,
    },
    /// Cylinder along Y
    CylinderY {
        /// Radius
        radius: f64,
        /// Length along Y
        length: f64,
    },
    /// Extruded text
    Text {
        /// Text content
        text: String,
        /// Font size
        font_size: f64,
        /// Extrusion thickness
        thickness: f64,
    },
    /// Rotation about an axis through the origin
    Rotate {
        /// Axis
        axis: Axis,
        /// Angle in degrees
        degrees: f64,
        /// Rotated solid
        solid: Box<PlannedSolid>,
    },
    /// Translation
    Translate {
        /// Offset in millimetres
        offset: [f64; 3],
        /// Translated solid
        solid: Box<PlannedSolid>,
    },
    /// Boolean union
    Union {
        /// First operand
        a: Box<PlannedSolid>,
        /// Second operand
        b: Box<PlannedSolid>,
    },
    /// Boolean difference
    Cut {
        /// Solid being cut
        base: Box<PlannedSolid>,
        /// Cutting tool
        tool: Box<PlannedSolid>,
    },
}

impl PlannedSolid {
    /// Total number of nodes in the tree.
    #[must_use]
    pub fn op_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.op_count()).sum::<usize>()
    }

    /// Direct operands of this node.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Rotate { solid, .. } | Self::Translate { solid, .. } => vec![solid.as_ref()],
            Self::Union { a, b } => vec![a.as_ref(), b.as_ref()],
            Self::Cut { base, tool } => vec![base.as_ref(), tool.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Operation name as it appears in JSON.
    #[must_use]
    pub const fn op_name(&self) -> &'static str {
        match self {
            Self::TaperedBlock { .. } => "tapered_block",
            Self::Block { .. } => "block",
            Self::CylinderY { .. } => "cylinder_y",
            Self::Text { .. } => "text",
            Self::Rotate { .. } => "rotate",
            Self::Translate { .. } => "translate",
            Self::Union { .. } => "union",
            Self::Cut { .. } => "cut",
        }
    }

    /// Counts nodes with the given operation name.
    #[must_use]
    pub fn count_ops(&self, op: &str) -> usize {
        usize::from(self.op_name() == op)
            + self
                .children()
                .iter()
                .map(|c| c.count_ops(op))
                .sum::<usize>()
    }
}

/// Kernel that records a build plan instead of computing geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanKernel;

impl PlanKernel {
    /// Creates a new plan kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CadKernel for PlanKernel {
    type Solid = PlannedSolid;

    fn name(&self) -> &'static str {
        "plan"
    }

    fn tapered_block(&self, bottom: Footprint, top: Footprint, height: f64) -> Result<PlannedSolid> {
        Ok(PlannedSolid::TaperedBlock {
            bottom,
            top,
            height,
        })
    }

    fn block(&self, footprint: Footprint, height: f64) -> Result<PlannedSolid> {
        Ok(PlannedSolid::Block { footprint, height })
    }

    fn cylinder_y(&self, radius: f64, length: f64) -> Result<PlannedSolid> {
        Ok(PlannedSolid::CylinderY { radius, length })
    }

    fn text(&self, text: &str, font_size: f64, thickness: f64) -> Result<Option<PlannedSolid>> {
        Ok(Some(PlannedSolid::Text {
            text: text.to_string(),
            font_size,
            thickness,
        }))
    }

    fn rotate(&self, solid: PlannedSolid, axis: Axis, degrees: f64) -> PlannedSolid {
        PlannedSolid::Rotate {
            axis,
            degrees,
            solid: Box::new(solid),
        }
    }

    fn translate(&self, solid: PlannedSolid, offset: [f64; 3]) -> PlannedSolid {
        PlannedSolid::Translate {
            offset,
            solid: Box::new(solid),
        }
    }

    fn union(&self, a: PlannedSolid, b: PlannedSolid) -> PlannedSolid {
        PlannedSolid::Union {
            a: Box::new(a),
            b: Box::new(b),
        }
    }

    fn cut(&self, base: PlannedSolid, tool: PlannedSolid) -> PlannedSolid {
        PlannedSolid::Cut {
            base: Box::new(base),
            tool: Box::new(tool),
        }
    }
}
