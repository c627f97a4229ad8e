//! Corrective actions chosen by the decision table

use std::fmt;
use std::path::PathBuf;

/// What reconcile mode does to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// File is compliant (or not an asset)
    NoOp,
    /// Render the preview, then archive or drop the asset
    GeneratePreview,
    /// Restore the asset from its archive, then render the preview
    ExtractThenGeneratePreview,
    /// Archive the asset and delete it
    CompressAndRemove,
    /// Archive and preview both exist; delete the asset
    DeleteRedundantOriginal,
}

impl Action {
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::NoOp)
    }

    /// Stable identifier used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Action::NoOp => "noop",
            Action::GeneratePreview => "generate_preview",
            Action::ExtractThenGeneratePreview => "extract_then_generate_preview",
            Action::CompressAndRemove => "compress_and_remove",
            Action::DeleteRedundantOriginal => "delete_redundant_original",
        }
    }

    /// Human-readable description.
    pub fn describe(&self) -> &'static str {
        match self {
            Action::NoOp => "nothing to do",
            Action::GeneratePreview => "generate preview",
            Action::ExtractThenGeneratePreview => "extract archive and generate preview",
            Action::CompressAndRemove => "compress and remove original",
            Action::DeleteRedundantOriginal => "delete redundant original",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Files touched by one applied action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub created: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl ActionOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created(mut self, path: PathBuf) -> Self {
        self.created.push(path);
        self
    }

    pub fn removed(mut self, path: PathBuf) -> Self {
        self.removed.push(path);
        self
    }

    /// Append another outcome (used when one action runs several steps).
    pub fn merge(mut self, other: ActionOutcome) -> Self {
        self.created.extend(other.created);
        self.removed.extend(other.removed);
        self
    }
}
