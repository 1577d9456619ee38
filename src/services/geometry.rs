//! Keycap geometry parameter derivation.
//!
//! Pure functions turning a row index, a key width and grid coordinates into
//! the dimensions, taper angles and tilt the CAD kernel consumes. Nothing here
//! touches the kernel or keeps state; calling any function twice with the same
//! input yields bit-identical output.

use serde::Serialize;

use crate::constants::{
    BOTTOM_1U, DEPTH_SCALE, DISH_DEPTH, HEIGHT_DIFF, ROOF_THICKNESS, STEM_BOSS_HEIGHT,
    STEM_BOSS_RADIUS, STEM_BOSS_SIZE, STEM_CROSS_HORIZONTAL, STEM_CROSS_VERTICAL,
    STEM_SLOP_INNER, STEM_SLOP_OUTER, STEM_THROW, TILT_ADJUST, UNIT, WALL_THICKNESS,
    WIDTH_DIFF,
};
use crate::models::{
    DishSpec, Footprint, KeycapSpec, LayoutEntry, LegendAnchor, RowProfile, StemSpec, Taper,
};

/// Bottom footprint length in millimetres for a key `width_units` wide.
///
/// `unit_length(1.0)` is exactly [`BOTTOM_1U`]; every extra unit adds one
/// [`UNIT`] of pitch.
#[must_use]
pub fn unit_length(width_units: f64) -> f64 {
    BOTTOM_1U + UNIT * (width_units - 1.0)
}

/// Scaled depth and net tilt (degrees) for a profile row.
///
/// Unknown rows use the row-1 profile. The bottom row's tilt sign is flipped
/// before the UHK80 adjustment is added.
#[must_use]
pub fn row_depth_and_tilt(row: i32) -> (f64, f64) {
    let profile = RowProfile::for_row(row);
    let depth = profile.base_depth * DEPTH_SCALE;
    let base_tilt = if row == RowProfile::BOTTOM_ROW {
        -profile.top_tilt
    } else {
        profile.top_tilt
    };

    (depth, base_tilt + TILT_ADJUST)
}

/// Wall half-angles `(left_right, front_back)` in degrees.
///
/// Lofting the bottom footprint over `total_depth` with these angles shrinks
/// the top face by exactly [`WIDTH_DIFF`] and [`HEIGHT_DIFF`].
/// `total_depth` must be positive.
#[must_use]
pub fn taper_angles(total_depth: f64) -> (f64, f64) {
    let left_right = ((WIDTH_DIFF / 2.0) / total_depth).atan().to_degrees();
    let front_back = ((HEIGHT_DIFF / 2.0) / total_depth).atan().to_degrees();
    (left_right, front_back)
}

/// Millimetre offset of a key at grid position `(x_units, y_units)`.
///
/// Layout Y grows downward; the result is in an upward-positive frame.
#[must_use]
pub fn grid_position(x_units: f64, y_units: f64) -> (f64, f64) {
    (x_units * UNIT, -y_units * UNIT)
}

/// Radius of a cylinder whose arc spans `chord` with depth `sagitta`.
#[must_use]
pub fn cylindrical_dish_radius(chord: f64, sagitta: f64) -> f64 {
    let half = chord / 2.0;
    (half * half + sagitta * sagitta) / (2.0 * sagitta)
}

/// MX stem socket dimensions with slop applied.
#[must_use]
pub fn stem_spec(cross_enabled: bool) -> StemSpec {
    let (boss_w, boss_d) = STEM_BOSS_SIZE;
    let (h_w, h_d) = STEM_CROSS_HORIZONTAL;
    let (v_w, v_d) = STEM_CROSS_VERTICAL;

    StemSpec {
        boss: Footprint::new(
            boss_w - 2.0 * STEM_SLOP_OUTER,
            boss_d - 2.0 * STEM_SLOP_OUTER,
        ),
        boss_radius: STEM_BOSS_RADIUS,
        boss_height: STEM_BOSS_HEIGHT,
        cross_horizontal: Footprint::new(h_w + STEM_SLOP_INNER, h_d + STEM_SLOP_INNER / 3.0),
        cross_vertical: Footprint::new(v_w + STEM_SLOP_INNER / 3.0, v_d + STEM_SLOP_INNER / 3.0),
        throw: STEM_THROW,
        cross_enabled,
    }
}

/// Full construction parameters for a keycap on `row`, `width_units` wide.
#[must_use]
pub fn keycap_spec(row: i32, width_units: f64, stem_cross: bool) -> KeycapSpec {
    let bottom = Footprint::new(unit_length(width_units), BOTTOM_1U);
    let top = Footprint::new(bottom.width - WIDTH_DIFF, bottom.depth - HEIGHT_DIFF);
    let (height, tilt) = row_depth_and_tilt(row);
    let (left_right, front_back) = taper_angles(height);

    KeycapSpec {
        row,
        width_units,
        bottom,
        top,
        height,
        taper: Taper::symmetric(left_right, front_back),
        wall: WALL_THICKNESS,
        roof: ROOF_THICKNESS,
        tilt,
        dish: DishSpec {
            chord: top.width,
            depth: DISH_DEPTH,
            radius: cylindrical_dish_radius(top.width, DISH_DEPTH),
        },
        stem: stem_spec(stem_cross),
    }
}

/// Legend sketch plane for a cap built from `spec`.
///
/// The top-face centre and normal are rotated about X by the cap tilt, then
/// the origin is pushed `embed` millimetres back along the normal.
#[must_use]
pub fn legend_anchor(spec: &KeycapSpec, embed: f64) -> LegendAnchor {
    let (sin, cos) = spec.tilt.to_radians().sin_cos();
    let normal = [0.0, -sin, cos];
    let center = [0.0, -spec.height * sin, spec.height * cos];

    LegendAnchor {
        origin: [
            center[0] - embed * normal[0],
            center[1] - embed * normal[1],
            center[2] - embed * normal[2],
        ],
        normal,
        tilt: spec.tilt,
    }
}

/// Every derived value for one layout key, for reports and the `params` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyParameters {
    /// Legend text
    pub legend: String,
    /// Profile row
    pub row: i32,
    /// Whether `row` has its own profile (false means the row-1 fallback was used)
    pub known_row: bool,
    /// Key width in keyboard units
    pub width_units: f64,
    /// Bottom footprint
    pub bottom: Footprint,
    /// Top footprint
    pub top: Footprint,
    /// Total cap depth
    pub depth: f64,
    /// Net tilt in degrees
    pub tilt: f64,
    /// Left/right wall angle in degrees
    pub taper_left_right: f64,
    /// Front/back wall angle in degrees
    pub taper_front_back: f64,
    /// Placement offset in millimetres
    pub offset: (f64, f64),
}

impl KeyParameters {
    /// Derives the parameters of a single key.
    #[must_use]
    pub fn for_entry(entry: &LayoutEntry) -> Self {
        let spec = keycap_spec(entry.row, entry.width_units, true);

        Self {
            legend: entry.legend.clone(),
            row: entry.row,
            known_row: RowProfile::is_known_row(entry.row),
            width_units: entry.width_units,
            bottom: spec.bottom,
            top: spec.top,
            depth: spec.height,
            tilt: spec.tilt,
            taper_left_right: spec.taper.left,
            taper_front_back: spec.taper.front,
            offset: grid_position(entry.grid_x, entry.grid_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_unit_length() {
        assert_eq!(unit_length(1.0), BOTTOM_1U);
        assert!(approx(unit_length(2.0), 37.21));
        assert!(approx(unit_length(1.5), 18.16 + 19.05 * 0.5));
    }

    #[test]
    fn test_row_depth_and_tilt_row_one() {
        assert_eq!(row_depth_and_tilt(1), (12.75, -3.0));
    }

    #[test]
    fn test_row_depth_and_tilt_bottom_row_flips_sign() {
        assert_eq!(row_depth_and_tilt(5), (17.25, 4.0));
    }

    #[test]
    fn test_row_depth_and_tilt_middle_rows() {
        assert_eq!(row_depth_and_tilt(2), (11.25, 1.0));
        assert_eq!(row_depth_and_tilt(3), (9.0, 5.0));
        assert_eq!(row_depth_and_tilt(4), (9.0, 14.0));
    }

    #[test]
    fn test_row_depth_and_tilt_unknown_row() {
        assert_eq!(row_depth_and_tilt(99), row_depth_and_tilt(1));
        assert_eq!(row_depth_and_tilt(0), row_depth_and_tilt(1));
        assert_eq!(row_depth_and_tilt(-1), row_depth_and_tilt(1));
        assert_eq!(row_depth_and_tilt(300), row_depth_and_tilt(1));
        assert_eq!(row_depth_and_tilt(i32::MIN), (12.75, -3.0));
    }

    #[test]
    fn test_taper_angles() {
        let (lr, fb) = taper_angles(12.75);
        assert!((lr - 13.24).abs() < 0.01, "left/right was {lr}");
        // atan(2 / 12.75) is 8.915 degrees
        assert!((fb - 8.915).abs() < 0.001, "front/back was {fb}");
        for angle in [lr, fb] {
            assert!(angle.is_finite());
            assert!(angle > 0.0 && angle < 90.0);
        }
    }

    #[test]
    fn test_taper_angles_reproduce_top_reduction() {
        for row in RowProfile::known_rows() {
            let (depth, _) = row_depth_and_tilt(row);
            let (lr, fb) = taper_angles(depth);
            assert!(approx(depth * lr.to_radians().tan() * 2.0, WIDTH_DIFF));
            assert!(approx(depth * fb.to_radians().tan() * 2.0, HEIGHT_DIFF));
        }
    }

    #[test]
    fn test_grid_position() {
        let (x, y) = grid_position(7.5, 0.0);
        assert!(approx(x, 142.875));
        assert_eq!(y, -0.0);
        assert_eq!(grid_position(0.0, 1.0), (0.0, -19.05));
    }

    #[test]
    fn test_pure_functions_are_bit_identical() {
        for _ in 0..3 {
            assert_eq!(unit_length(1.75).to_bits(), unit_length(1.75).to_bits());
            assert_eq!(row_depth_and_tilt(3), row_depth_and_tilt(3));
            let (a, b) = taper_angles(9.0);
            let (c, d) = taper_angles(9.0);
            assert_eq!((a.to_bits(), b.to_bits()), (c.to_bits(), d.to_bits()));
            assert_eq!(grid_position(13.625, -3.0), grid_position(13.625, -3.0));
        }
    }

    #[test]
    fn test_cylindrical_dish_radius() {
        // chord 10, sagitta 1: (25 + 1) / 2
        assert!(approx(cylindrical_dish_radius(10.0, 1.0), 13.0));
    }

    #[test]
    fn test_keycap_spec_top_is_bottom_minus_diffs() {
        let spec = keycap_spec(1, 1.5, true);
        assert!(approx(spec.bottom.width, unit_length(1.5)));
        assert_eq!(spec.bottom.depth, BOTTOM_1U);
        assert!(approx(spec.top.width, spec.bottom.width - WIDTH_DIFF));
        assert!(approx(spec.top.depth, BOTTOM_1U - HEIGHT_DIFF));
        assert_eq!(spec.height, 12.75);
        assert_eq!(spec.tilt, -3.0);
        assert_eq!(spec.taper.left, spec.taper.right);
        assert_eq!(spec.taper.front, spec.taper.back);
        assert_eq!(spec.dish.chord, spec.top.width);
        assert_eq!(spec.dish.depth, DISH_DEPTH);
    }

    #[test]
    fn test_stem_spec_applies_slop() {
        let stem = stem_spec(true);
        assert!(approx(stem.boss.width, 6.5));
        assert!(approx(stem.boss.depth, 4.8));
        assert!(approx(stem.cross_horizontal.width, 4.23));
        assert!(stem.cross_enabled);
        assert!(!stem_spec(false).cross_enabled);
    }

    #[test]
    fn test_legend_anchor_untilted() {
        let mut spec = keycap_spec(1, 1.0, true);
        spec.tilt = 0.0;
        let anchor = legend_anchor(&spec, 0.8);
        assert_eq!(anchor.normal, [0.0, -0.0, 1.0]);
        assert!(approx(anchor.origin[1], 0.0));
        assert!(approx(anchor.origin[2], spec.height - 0.8));
    }

    #[test]
    fn test_legend_anchor_follows_tilt() {
        let spec = keycap_spec(4, 1.0, true);
        let anchor = legend_anchor(&spec, 0.0);
        let (sin, cos) = 14.0_f64.to_radians().sin_cos();
        assert!(approx(anchor.origin[1], -9.0 * sin));
        assert!(approx(anchor.origin[2], 9.0 * cos));
        let norm: f64 = anchor.normal.iter().map(|c| c * c).sum::<f64>().sqrt();
        assert!(approx(norm, 1.0));
    }

    #[test]
    fn test_key_parameters_for_entry() {
        let entry = LayoutEntry::new(5, 1.25, "Shift", 12.85, -4.0, 4.0);
        let params = KeyParameters::for_entry(&entry);
        assert_eq!(params.depth, 17.25);
        assert_eq!(params.tilt, 4.0);
        assert!(params.known_row);
        assert!(approx(params.offset.1, 4.0 * UNIT));

        let unknown = KeyParameters::for_entry(&LayoutEntry::new(9, 1.0, "?", 0.0, 0.0, 4.0));
        assert!(!unknown.known_row);
        assert_eq!(unknown.depth, 12.75);
    }
}
