//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions shared by the binary and its tests
//! - `factory` - Wires configured adapters into the application services

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
