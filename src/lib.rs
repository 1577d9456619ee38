//! UHK80 Keycaps Library
//!
//! This library derives keycap geometry for the UHK80 keyboard from a small
//! row profile table, lays caps out on the key grid, and hands construction
//! to a pluggable CAD kernel: a JSON build-plan recorder by default, or a
//! `csgrs` mesh kernel with the `csg` feature.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod kernel;
pub mod models;
pub mod services;
