//! Layout validation before building geometry.
//!
//! The geometry functions are total, so nothing here is required for them to
//! run; this catches layouts that would produce meaningless caps (zero-width
//! keys, NaN positions) or that rely on the row fallback by accident.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use std::fmt;

use crate::constants::MIN_WIDTH_UNITS;
use crate::models::{Layout, LayoutEntry, RowProfile};

/// Keys on the same grid row may overlap by this many units before it is reported.
pub const OVERLAP_TOLERANCE: f64 = 0.05;

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Problems that make the layout unusable
    pub errors: Vec<ValidationIssue>,
    /// Suspicious but buildable input
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("{} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("{} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Kind of validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Layout has no keys
    EmptyLayout,
    /// Width below 1u or not finite
    InvalidWidth,
    /// Grid coordinate not finite
    InvalidPosition,
    /// Font size not positive or not finite
    InvalidFontSize,
    /// Row has no profile; the row-1 profile will be used
    UnknownRow,
    /// Legend is blank; no legend part will be built
    BlankLegend,
    /// Two keys on the same grid row overlap
    Overlap,
}

/// One validation finding, optionally tied to a key index.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// What went wrong
    pub kind: IssueKind,
    /// Index of the offending key in layout order
    pub key_index: Option<usize>,
    /// Human-readable message
    pub message: String,
}

impl ValidationIssue {
    fn new(kind: IssueKind, key_index: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            key_index,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key_index {
            Some(index) => write!(f, "key {}: {}", index, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Validates a layout, collecting every issue rather than stopping at the first.
#[must_use]
pub fn validate_layout(layout: &Layout) -> ValidationReport {
    let mut report = ValidationReport::new();

    if layout.is_empty() {
        report.errors.push(ValidationIssue::new(
            IssueKind::EmptyLayout,
            None,
            format!("Layout '{}' has no keys", layout.name),
        ));
        return report;
    }

    for (index, key) in layout.keys.iter().enumerate() {
        check_key(index, key, &mut report);
    }

    check_overlaps(layout, &mut report);

    report
}

fn check_key(index: usize, key: &LayoutEntry, report: &mut ValidationReport) {
    let label = display_legend(key);

    if !key.width_units.is_finite() || key.width_units < MIN_WIDTH_UNITS {
        report.errors.push(ValidationIssue::new(
            IssueKind::InvalidWidth,
            Some(index),
            format!(
                "{label} has width {}u; keys must be at least {MIN_WIDTH_UNITS}u wide",
                key.width_units
            ),
        ));
    }

    if !key.grid_x.is_finite() || !key.grid_y.is_finite() {
        report.errors.push(ValidationIssue::new(
            IssueKind::InvalidPosition,
            Some(index),
            format!("{label} has a non-finite position ({}, {})", key.grid_x, key.grid_y),
        ));
    }

    if !key.font_size.is_finite() || key.font_size <= 0.0 {
        report.errors.push(ValidationIssue::new(
            IssueKind::InvalidFontSize,
            Some(index),
            format!("{label} has font size {}; must be positive", key.font_size),
        ));
    }

    if !RowProfile::is_known_row(key.row) {
        report.warnings.push(ValidationIssue::new(
            IssueKind::UnknownRow,
            Some(index),
            format!(
                "{label} uses row {}, which has no profile; row 1 will be used",
                key.row
            ),
        ));
    }

    if !key.has_legend() {
        report.warnings.push(ValidationIssue::new(
            IssueKind::BlankLegend,
            Some(index),
            "legend is blank; the cap will be built without one",
        ));
    }
}

fn check_overlaps(layout: &Layout, report: &mut ValidationReport) {
    let mut placed: Vec<(usize, &LayoutEntry)> = layout
        .keys
        .iter()
        .enumerate()
        .filter(|(_, k)| k.grid_x.is_finite() && k.grid_y.is_finite() && k.width_units.is_finite())
        .collect();

    placed.sort_by(|(_, a), (_, b)| {
        a.grid_y
            .total_cmp(&b.grid_y)
            .then(a.span_units().0.total_cmp(&b.span_units().0))
    });

    for (i, &(first_index, first)) in placed.iter().enumerate() {
        let (_, first_right) = first.span_units();

        for &(second_index, second) in &placed[i + 1..] {
            let (second_left, second_right) = second.span_units();
            if second.grid_y != first.grid_y || second_left >= first_right {
                break;
            }

            let overlap = first_right.min(second_right) - second_left;
            if overlap > OVERLAP_TOLERANCE {
                report.warnings.push(ValidationIssue::new(
                    IssueKind::Overlap,
                    Some(second_index),
                    format!(
                        "{} overlaps {} (key {}) by {:.3}u",
                        display_legend(second),
                        display_legend(first),
                        first_index,
                        overlap
                    ),
                ));
            }
        }
    }
}

fn display_legend(key: &LayoutEntry) -> String {
    if key.has_legend() {
        format!("'{}'", key.legend)
    } else {
        "unlabeled key".to_string()
    }
}
