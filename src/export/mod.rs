//! Export of assemblies and parameter reports.
//!
//! - [`plan`] serializes a plan-kernel assembly to JSON.
//! - [`sheet`] renders a markdown parameter sheet for a layout.
//! - `stl` (feature `csg`) writes mesh assemblies as binary STL.

pub mod plan;
pub mod sheet;
#[cfg(feature = "csg")]
pub mod stl;

pub use plan::{plan_document, PlanDocument};
pub use sheet::generate_parameter_sheet;

use std::path::{Path, PathBuf};

use crate::models::Layout;

/// Default export path: `<dir>/<layout>_<YYYY-MM-DD>.<ext>`.
///
/// `dir` falls back to the current directory.
#[must_use]
pub fn default_output_path(layout: &Layout, extension: &str, dir: Option<&Path>) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    let file_name = format!("{}_{}.{}", layout.file_stem(), date, extension);

    match dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let layout = Layout::new("Right Half");
        let path = default_output_path(&layout, "json", None);

        let path_str = path.to_string_lossy();
        assert!(path_str.starts_with(&format!("{}_", layout.file_stem())));
        assert!(path_str.ends_with(".json"));
    }

    #[test]
    fn test_default_output_path_in_dir() {
        let layout = Layout::new("top-row");
        let path = default_output_path(&layout, "stl", Some(Path::new("/tmp/out")));

        assert!(path.starts_with("/tmp/out"));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("stl"));
    }
}
