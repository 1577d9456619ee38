//! CLI command handlers for UHK80 Keycaps.
//!
//! This module provides headless, scriptable access to the keycap generator
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod export;
pub mod layout;
pub mod params;
pub mod plan;
pub mod sheet;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use layout::LayoutArgs;
pub use params::ParamsArgs;
pub use plan::PlanArgs;
pub use sheet::SheetArgs;
pub use validate::ValidateArgs;
