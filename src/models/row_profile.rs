//! Per-row keycap profile table (DCS baselines used by the UHK80 caps).

use serde::{Deserialize, Serialize};

/// Baseline depth and top tilt for one physical key row.
///
/// Values are the unscaled DCS numbers; the UHK80 adjustments are applied by
/// [`crate::services::geometry::row_depth_and_tilt`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowProfile {
    /// Cap depth in millimetres, before scaling
    pub base_depth: f64,
    /// Top surface tilt in degrees
    pub top_tilt: f64,
}

/// Profiles for rows 1 (function row) through 5 (bottom row).
const ROW_PROFILES: [(i32, RowProfile); 5] = [
    (1, RowProfile::new(8.5, -1.0)),
    (2, RowProfile::new(7.5, 3.0)),
    (3, RowProfile::new(6.0, 7.0)),
    (4, RowProfile::new(6.0, 16.0)),
    (5, RowProfile::new(11.5, -6.0)),
];

impl RowProfile {
    /// Profile used for rows missing from the table (same as row 1).
    pub const DEFAULT: Self = Self::new(8.5, -1.0);

    /// The row whose tilt convention is inverted relative to the others.
    pub const BOTTOM_ROW: i32 = 5;

    /// Creates a new profile.
    #[must_use]
    pub const fn new(base_depth: f64, top_tilt: f64) -> Self {
        Self {
            base_depth,
            top_tilt,
        }
    }

    /// Looks up the profile for `row`, returning `None` for unknown rows.
    #[must_use]
    pub fn lookup(row: i32) -> Option<Self> {
        ROW_PROFILES
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, profile)| *profile)
    }

    /// Profile for `row`, falling back to [`RowProfile::DEFAULT`].
    #[must_use]
    pub fn for_row(row: i32) -> Self {
        Self::lookup(row).unwrap_or(Self::DEFAULT)
    }

    /// Returns true if `row` has its own entry in the table.
    #[must_use]
    pub fn is_known_row(row: i32) -> bool {
        Self::lookup(row).is_some()
    }

    /// All rows with a defined profile, in ascending order.
    pub fn known_rows() -> impl Iterator<Item = i32> {
        ROW_PROFILES.iter().map(|(row, _)| *row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_rows() {
        assert_eq!(RowProfile::lookup(1), Some(RowProfile::new(8.5, -1.0)));
        assert_eq!(RowProfile::lookup(4), Some(RowProfile::new(6.0, 16.0)));
        assert_eq!(RowProfile::lookup(5), Some(RowProfile::new(11.5, -6.0)));
    }

    #[test]
    fn test_unknown_row_falls_back_to_row_one() {
        assert_eq!(RowProfile::lookup(0), None);
        assert_eq!(RowProfile::lookup(99), None);
        assert_eq!(RowProfile::for_row(0), RowProfile::for_row(1));
        assert_eq!(RowProfile::for_row(99), RowProfile::DEFAULT);
        assert_eq!(RowProfile::for_row(-5), RowProfile::DEFAULT);
        assert_eq!(RowProfile::for_row(300), RowProfile::DEFAULT);
    }

    #[test]
    fn test_known_rows() {
        let rows: Vec<i32> = RowProfile::known_rows().collect();
        assert_eq!(rows, vec![1, 2, 3, 4, 5]);
        assert!(RowProfile::is_known_row(3));
        assert!(!RowProfile::is_known_row(6));
    }
}
