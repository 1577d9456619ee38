//! Derived keycap parameters handed to the CAD kernel.
//!
//! These are plain values computed by [`crate::services::geometry`]; nothing
//! here is stored or cached between calls.

use serde::{Deserialize, Serialize};

/// Rectangular footprint in millimetres (`width` along X, `depth` along Y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub depth: f64,
}

impl Footprint {
    /// Creates a new footprint.
    #[must_use]
    pub const fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }
}

/// Per-side wall angles in degrees, measured from vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Taper {
    /// Front wall (-Y side)
    pub front: f64,
    /// Back wall (+Y side)
    pub back: f64,
    /// Left wall (-X side)
    pub left: f64,
    /// Right wall (+X side)
    pub right: f64,
}

impl Taper {
    /// Symmetric taper from a left/right and a front/back angle.
    #[must_use]
    pub const fn symmetric(left_right: f64, front_back: f64) -> Self {
        Self {
            front: front_back,
            back: front_back,
            left: left_right,
            right: left_right,
        }
    }
}

/// Cylindrical dish cut across the top face, axis along Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DishSpec {
    /// Chord of the dish (top face width)
    pub chord: f64,
    /// Depth of the dish at its centre
    pub depth: f64,
    /// Radius of the cutting cylinder
    pub radius: f64,
}

/// Cherry MX compatible stem socket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StemSpec {
    /// Boss outline after slop
    pub boss: Footprint,
    /// Boss corner rounding radius
    pub boss_radius: f64,
    /// Boss height from the underside
    pub boss_height: f64,
    /// Horizontal cross arm after slop
    pub cross_horizontal: Footprint,
    /// Vertical cross arm after slop
    pub cross_vertical: Footprint,
    /// Depth of the cross cut
    pub throw: f64,
    /// Whether the cross is cut at all
    pub cross_enabled: bool,
}

/// Everything the kernel needs to build one untilted, unplaced keycap.
///
/// The modelling frame has the bottom footprint centred on the origin and the
/// base at z = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeycapSpec {
    /// Profile row the spec was derived from
    pub row: i32,
    /// Key width in keyboard units
    pub width_units: f64,
    /// Footprint at z = 0
    pub bottom: Footprint,
    /// Footprint at z = height
    pub top: Footprint,
    /// Total cap height
    pub height: f64,
    /// Wall angles producing `top` from `bottom` over `height`
    pub taper: Taper,
    /// Shell wall thickness
    pub wall: f64,
    /// Shell roof thickness
    pub roof: f64,
    /// Rotation about X applied after construction, in degrees
    pub tilt: f64,
    /// Top-face dish
    pub dish: DishSpec,
    /// Stem socket
    pub stem: StemSpec,
}

/// Plane on which a legend is sketched, in the cap's tilted frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendAnchor {
    /// Sketch plane origin
    pub origin: [f64; 3],
    /// Unit normal; the legend extrudes along it
    pub normal: [f64; 3],
    /// Tilt of the plane about X in degrees (matches the cap)
    pub tilt: f64,
}

/// Text legend extruded from a [`LegendAnchor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    /// Text to render, centred on the anchor
    pub text: String,
    /// Font size
    pub font_size: f64,
    /// Extrusion thickness along the anchor normal
    pub thickness: f64,
    /// Sketch plane
    pub anchor: LegendAnchor,
}
