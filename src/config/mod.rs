//! Configuration module for psdkeep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PSDKEEP_*)
//! 3. Root config (`<root>/.psdkeep.toml`)
//! 4. User config (`~/.config/psdkeep/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    ArchiverConfig, ColorMode, Config, IgnoreConfig, OutputConfig, PreviewConfig, WaitConfig,
};
