//! Error types for psdkeep
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for psdkeep operations
pub type PsdkeepResult<T> = Result<T, PsdkeepError>;

/// Main error type for psdkeep operations
#[derive(Error, Debug)]
pub enum PsdkeepError {
    /// External tool ran but reported failure
    #[error("{tool} failed on {path}: {message}")]
    ToolFailed {
        tool: String,
        path: PathBuf,
        message: String,
    },

    /// External tool could not be started
    #[error("{tool} not found (looked for '{program}' on PATH)")]
    ToolNotFound { tool: String, program: String },

    /// A generated file never became visible
    #[error("timed out waiting for {path} after {attempts} attempts")]
    RetryExhausted { path: PathBuf, attempts: u32 },

    /// Root directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PsdkeepError {
    /// Errors raised by the archiver or preview renderer.
    pub fn is_tool_error(&self) -> bool {
        matches!(
            self,
            PsdkeepError::ToolFailed { .. } | PsdkeepError::ToolNotFound { .. }
        )
    }

    /// The path this error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PsdkeepError::ToolFailed { path, .. }
            | PsdkeepError::RetryExhausted { path, .. }
            | PsdkeepError::DirectoryNotFound { path } => Some(path),
            PsdkeepError::InvalidConfig { file, .. } => Some(file),
            PsdkeepError::ToolNotFound { .. } | PsdkeepError::Io(_) => None,
        }
    }
}
