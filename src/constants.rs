//! Application-wide constants.
//!
//! This module defines the application name plus the fixed keycap dimensions
//! mirrored from the KeyV2 OpenSCAD defaults and the UHK80 adjustments.
//! All lengths are millimetres, all angles degrees.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "UHK80 Keycaps";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "uhk80-keycaps";

/// Environment variable that overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "UHK80_KEYCAPS_CONFIG_DIR";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "UHK80Keycaps";

// -----------------------------------------------------------------------------
// Key grid
// -----------------------------------------------------------------------------

/// Keyboard unit (key pitch).
pub const UNIT: f64 = 19.05;

/// Bottom footprint of a 1u key (both width and depth).
pub const BOTTOM_1U: f64 = 18.16;

/// Top face is narrower than the bottom by this much, independent of width.
pub const WIDTH_DIFF: f64 = 6.0;

/// Top face is shallower than the bottom by this much.
pub const HEIGHT_DIFF: f64 = 4.0;

/// Smallest key width the geometry is defined for.
pub const MIN_WIDTH_UNITS: f64 = 1.0;

// -----------------------------------------------------------------------------
// UHK80 adjustments
// -----------------------------------------------------------------------------

/// Scale applied to the DCS base depth of every row.
pub const DEPTH_SCALE: f64 = 1.5;

/// Sagitta of the cylindrical dish cut into the top face.
pub const DISH_DEPTH: f64 = 0.75;

/// Extra forward tilt added to every row.
pub const TILT_ADJUST: f64 = -2.0;

/// Shell wall thickness.
pub const WALL_THICKNESS: f64 = 1.5;

/// Shell roof thickness.
pub const ROOF_THICKNESS: f64 = 1.0;

// -----------------------------------------------------------------------------
// Cherry MX stem socket
// -----------------------------------------------------------------------------

/// Depth of the cross cut.
pub const STEM_THROW: f64 = 4.0;

/// Slop subtracted from each side of the boss outline.
pub const STEM_SLOP_OUTER: f64 = 0.35;

/// Slop added to the cross hole.
pub const STEM_SLOP_INNER: f64 = 0.20;

/// Rounding radius of the boss corners.
pub const STEM_BOSS_RADIUS: f64 = 1.0;

/// Height of the boss measured from the underside into the cap.
pub const STEM_BOSS_HEIGHT: f64 = 6.0;

/// Nominal outer boss footprint before slop.
pub const STEM_BOSS_SIZE: (f64, f64) = (7.2, 5.5);

/// Nominal horizontal cross arm before slop.
pub const STEM_CROSS_HORIZONTAL: (f64, f64) = (4.03, 1.25);

/// Nominal vertical cross arm before slop.
pub const STEM_CROSS_VERTICAL: (f64, f64) = (1.15, 4.23);

// -----------------------------------------------------------------------------
// Legends
// -----------------------------------------------------------------------------

/// Legend extrusion thickness.
pub const LEGEND_THICKNESS: f64 = 0.6;

/// How far the legend base sinks below the top face.
pub const LEGEND_EMBED: f64 = 0.8;

/// Font size used when a layout file omits one.
pub const DEFAULT_FONT_SIZE: f64 = 4.0;
