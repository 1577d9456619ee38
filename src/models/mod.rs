//! Data models for row profiles, layouts, keycap parameters and colors.
//!
//! Models are plain values, independent of the CAD kernel and the CLI.

pub mod keycap;
pub mod layout;
pub mod rgb;
pub mod row_profile;

// Re-export all model types
pub use keycap::{DishSpec, Footprint, KeycapSpec, LegendAnchor, LegendSpec, StemSpec, Taper};
pub use layout::{cap_part_name, legend_part_name, Layout, LayoutEntry};
pub use rgb::RgbColor;
pub use row_profile::RowProfile;
