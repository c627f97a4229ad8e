//! File kinds and probed state

use std::fmt;
use std::path::Path;

use super::extension::{extension_of, ASSET_EXTENSION};

/// What role a file plays in an asset triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Design source (`.psd`)
    Asset,
    /// Compressed at-rest copy of an asset
    Archive,
    /// Anything else, including previews
    Other,
}

impl FileKind {
    /// Classify an extension (as returned by `extension_of`).
    pub fn from_extension(extension: &str, archive_extension: &str) -> Self {
        if extension == ASSET_EXTENSION {
            FileKind::Asset
        } else if extension == archive_extension {
            FileKind::Archive
        } else {
            FileKind::Other
        }
    }

    /// Classify a path by its extension, case-insensitively.
    pub fn of_path(path: &Path, archive_extension: &str) -> Self {
        Self::from_extension(&extension_of(path), archive_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Asset => "asset",
            FileKind::Archive => "archive",
            FileKind::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Companion state of a single file.
///
/// For non-asset files every flag is vacuously `true`, so they are always
/// compliant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileState {
    pub kind: FileKind,
    /// A preview sits next to the file
    pub has_preview: bool,
    /// An archive sits next to the file (assets only)
    pub has_archive: bool,
    /// The uncompressed asset sits next to the file (archives only)
    pub has_asset: bool,
}

impl FileState {
    /// State of a file that takes no part in reconciliation.
    pub fn untracked() -> Self {
        Self {
            kind: FileKind::Other,
            has_preview: true,
            has_archive: true,
            has_asset: true,
        }
    }
}
