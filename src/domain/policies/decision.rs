//! Decision table
//!
//! Maps a file's probed state to exactly one reconcile action, or to an audit
//! verdict. Reconcile mode evaluates a priority chain where the first match
//! wins:
//!
//! 1. asset without preview            -> generate preview
//! 2. archive without preview, no asset -> extract, then generate preview
//! 3. asset without archive            -> compress and remove
//! 4. asset with preview and archive   -> delete the asset
//!
//! Everything else is a no-op. An archive without a preview whose asset is
//! already present is left alone; the asset's own rule covers it.

use crate::domain::value_objects::{Action, FileKind, FileState, ViolationKind};

/// Choose the reconcile action for a file.
pub fn decide(state: &FileState) -> Action {
    match state.kind {
        FileKind::Asset if !state.has_preview => Action::GeneratePreview,
        FileKind::Archive if !state.has_preview && !state.has_asset => {
            Action::ExtractThenGeneratePreview
        }
        FileKind::Asset if !state.has_archive => Action::CompressAndRemove,
        FileKind::Asset => Action::DeleteRedundantOriginal,
        FileKind::Archive | FileKind::Other => Action::NoOp,
    }
}

/// Audit verdict for a file; `None` means compliant.
pub fn verdict(state: &FileState) -> Option<ViolationKind> {
    match state.kind {
        FileKind::Asset if !state.has_preview => Some(ViolationKind::AssetMissingPreview),
        FileKind::Archive if !state.has_preview => Some(ViolationKind::ArchiveMissingPreview),
        FileKind::Asset if !state.has_archive => Some(ViolationKind::AssetNotArchived),
        FileKind::Asset => Some(ViolationKind::RedundantOriginal),
        FileKind::Archive | FileKind::Other => None,
    }
}
