//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::WaitPolicy;
use crate::domain::value_objects::{normalize_extension, IgnoreList, DEFAULT_ARCHIVE_EXTENSION};
use crate::error::PsdkeepResult;
use crate::infrastructure::archiver::seven_zip;
use crate::infrastructure::preview::command;
use crate::infrastructure::{CommandPreviewRenderer, SevenZipArchiver};

use super::loader::{self, ConfigWarning};

/// Names the walker never descends into or classifies
///
/// `names` replaces the built-in list; `additional` extends whichever list
/// is in effect.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub names: Option<Vec<String>>,

    #[serde(default)]
    pub additional: Vec<String>,
}

/// Archiver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiverConfig {
    #[serde(default = "default_archiver_program")]
    pub program: String,

    #[serde(default = "default_archive_extension")]
    pub extension: String,

    #[serde(default = "default_archive_format")]
    pub format: String,
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        Self {
            program: default_archiver_program(),
            extension: default_archive_extension(),
            format: default_archive_format(),
        }
    }
}

fn default_archiver_program() -> String {
    seven_zip::DEFAULT_PROGRAM.to_string()
}

fn default_archive_extension() -> String {
    DEFAULT_ARCHIVE_EXTENSION.to_string()
}

fn default_archive_format() -> String {
    seven_zip::DEFAULT_FORMAT.to_string()
}

/// Preview renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_program")]
    pub program: String,

    #[serde(default = "default_preview_args")]
    pub args: Vec<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            program: default_preview_program(),
            args: default_preview_args(),
        }
    }
}

fn default_preview_program() -> String {
    command::DEFAULT_PROGRAM.to_string()
}

fn default_preview_args() -> Vec<String> {
    command::DEFAULT_ARGS.iter().map(|s| s.to_string()).collect()
}

/// Durability wait configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    #[serde(default = "default_wait_attempts")]
    pub attempts: u32,

    #[serde(default = "default_wait_interval_ms")]
    pub interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            attempts: default_wait_attempts(),
            interval_ms: default_wait_interval_ms(),
        }
    }
}

fn default_wait_attempts() -> u32 {
    5
}

fn default_wait_interval_ms() -> u64 {
    1000
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ignore: IgnoreConfig,

    #[serde(default)]
    pub archiver: ArchiverConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub wait: WaitConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PsdkeepResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PsdkeepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the config that applies to `root`, with environment overrides.
    pub fn load_for_root(root: &Path) -> PsdkeepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_root(root)
    }

    /// Config file candidates for `root`, in lookup order.
    pub fn candidates(root: &Path) -> Vec<PathBuf> {
        loader::candidates(root)
    }

    /// Apply environment variable overrides (PSDKEEP_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self)
    }

    /// Effective ignore list; always contains the config file name.
    pub fn ignore_list(&self) -> IgnoreList {
        let mut list = match &self.ignore.names {
            Some(names) => IgnoreList::new(names.iter().cloned()),
            None => IgnoreList::default(),
        };
        list.extend(self.ignore.additional.iter().cloned());
        list
    }

    /// Archive extension, lower-cased with a leading dot.
    pub fn archive_extension(&self) -> String {
        let ext = normalize_extension(&self.archiver.extension);
        if ext == "." {
            DEFAULT_ARCHIVE_EXTENSION.to_string()
        } else {
            ext
        }
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy::new(
            self.wait.attempts,
            Duration::from_millis(self.wait.interval_ms),
        )
    }

    pub fn archiver(&self) -> SevenZipArchiver {
        SevenZipArchiver::new(&self.archiver.program, self.archiver.format.clone())
    }

    pub fn renderer(&self) -> CommandPreviewRenderer {
        CommandPreviewRenderer::new(&self.preview.program, self.preview.args.iter().cloned())
    }
}
