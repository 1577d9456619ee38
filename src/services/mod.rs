//! Service layer for business logic.
//!
//! Geometry derivation, layout loading, validation and assembly. Services
//! depend on the models and the kernel trait, never on the CLI.

pub mod assembly;
pub mod geometry;
pub mod layouts;
pub mod validation;

// Re-export commonly used types and functions
pub use assembly::{build_assembly, Assembly, AssemblyOptions, Part, PartRole};
pub use geometry::KeyParameters;
pub use layouts::LayoutService;
pub use validation::{validate_layout, ValidationReport};
