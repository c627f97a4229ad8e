//! Extension helpers
//!
//! Extensions are compared lowercase and always carry their leading period
//! (`.psd`, `.7z`). Only the final path component is inspected: a dot in a
//! parent directory never counts, and a leading dot (`.gitignore`) marks a
//! hidden file rather than an extension.

use std::path::{Path, PathBuf};

/// Extension of the design source files this tool manages.
pub const ASSET_EXTENSION: &str = ".psd";

/// Extension of generated previews.
pub const PREVIEW_EXTENSION: &str = ".png";

/// Archive extension used when none is configured.
pub const DEFAULT_ARCHIVE_EXTENSION: &str = ".7z";

/// Byte index of the extension's period within a file name.
fn extension_start(name: &str) -> Option<usize> {
    match name.rfind('.') {
        None | Some(0) => None,
        Some(idx) => Some(idx),
    }
}

/// Lowercase extension of `path` including the period, or `""` when the file
/// name has none.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    extension_start(&name)
        .map(|idx| name[idx..].to_lowercase())
        .unwrap_or_default()
}

/// Replace the extension of `path` with `new_ext`, or append it when the file
/// name has no extension.
pub fn with_extension(path: &Path, new_ext: &str) -> PathBuf {
    let Some(name) = path.file_name() else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(new_ext);
        return PathBuf::from(raw);
    };
    let name = name.to_string_lossy();
    let stem = match extension_start(&name) {
        Some(idx) => &name[..idx],
        None => &name[..],
    };
    path.with_file_name(format!("{}{}", stem, new_ext))
}

/// Normalize a configured extension: lowercase, with exactly one leading
/// period (`"7Z"` and `".7z"` both become `".7z"`).
pub fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_lowercase())
}
