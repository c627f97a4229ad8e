//! State prober
//!
//! Looks next to a file for its companions. Non-asset files are vacuously
//! compliant and never touch the filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{
    with_extension, FileKind, FileState, ASSET_EXTENSION, PREVIEW_EXTENSION,
};

/// Determines which companions of a file exist on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateProber {
    archive_extension: String,
}

impl StateProber {
    /// `archive_extension` must be normalized (lowercase, leading period).
    pub fn new(archive_extension: impl Into<String>) -> Self {
        Self {
            archive_extension: archive_extension.into(),
        }
    }

    pub fn archive_extension(&self) -> &str {
        &self.archive_extension
    }

    pub fn kind_of(&self, path: &Path) -> FileKind {
        FileKind::of_path(path, &self.archive_extension)
    }

    /// `true` unless `path` is an asset or archive without a preview.
    pub fn has_preview(&self, path: &Path) -> io::Result<bool> {
        match self.kind_of(path) {
            FileKind::Other => Ok(true),
            FileKind::Asset | FileKind::Archive => {
                with_extension(path, PREVIEW_EXTENSION).try_exists()
            }
        }
    }

    /// `true` unless `path` is an asset without an archive.
    ///
    /// Matched case-insensitively, the same way `has_asset` looks back.
    pub fn has_archive(&self, path: &Path) -> io::Result<bool> {
        match self.kind_of(path) {
            FileKind::Asset => Ok(find_companion(path, &self.archive_extension)?.is_some()),
            FileKind::Archive | FileKind::Other => Ok(true),
        }
    }

    /// `true` unless `path` is an archive whose asset is absent.
    ///
    /// The asset may carry an uppercase extension (`LOGO.PSD`) since
    /// extraction restores the name it was archived under.
    pub fn has_asset(&self, path: &Path) -> io::Result<bool> {
        match self.kind_of(path) {
            FileKind::Archive => Ok(find_companion(path, ASSET_EXTENSION)?.is_some()),
            FileKind::Asset | FileKind::Other => Ok(true),
        }
    }

    /// Probe every companion of `path`.
    pub fn probe(&self, path: &Path) -> io::Result<FileState> {
        let kind = self.kind_of(path);
        if kind == FileKind::Other {
            return Ok(FileState::untracked());
        }
        Ok(FileState {
            kind,
            has_preview: self.has_preview(path)?,
            has_archive: self.has_archive(path)?,
            has_asset: self.has_asset(path)?,
        })
    }
}

/// Locate the sibling of `path` with `extension`, matching the file name
/// case-insensitively when the exact lowercase name is absent.
pub fn find_companion(path: &Path, extension: &str) -> io::Result<Option<PathBuf>> {
    let exact = with_extension(path, extension);
    if exact.try_exists()? {
        return Ok(Some(exact));
    }

    let Some(wanted) = exact.file_name().map(|n| n.to_string_lossy().to_lowercase()) else {
        return Ok(None);
    };
    let parent = match exact.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    for entry in fs::read_dir(parent)? {
        let name = entry?.file_name();
        if name.to_string_lossy().to_lowercase() == wanted {
            return Ok(Some(exact.with_file_name(name)));
        }
    }
    Ok(None)
}
