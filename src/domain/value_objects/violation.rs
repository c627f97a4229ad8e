//! Audit violations

use std::fmt;
use std::path::PathBuf;

/// Why a file fails the "archived and previewed" invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A PSD with no preview next to it
    AssetMissingPreview,
    /// A previewed PSD that was never archived
    AssetNotArchived,
    /// A PSD whose archive and preview both exist
    RedundantOriginal,
    /// An archive with no preview next to it
    ArchiveMissingPreview,
}

impl ViolationKind {
    /// Stable identifier used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::AssetMissingPreview => "psd_missing_preview",
            ViolationKind::AssetNotArchived => "psd_not_archived",
            ViolationKind::RedundantOriginal => "psd_redundant",
            ViolationKind::ArchiveMissingPreview => "archive_missing_preview",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ViolationKind::AssetMissingPreview => {
                "PSD file does not have a preview png associated with it"
            }
            ViolationKind::AssetNotArchived => "PSD file is not archived",
            ViolationKind::RedundantOriginal => {
                "PSD file has both a preview and an archive; remove the PSD"
            }
            ViolationKind::ArchiveMissingPreview => {
                "Archive does not have a preview png associated with it"
            }
        }
    }

    /// Remediation hint shown under the violation.
    pub fn hint(&self) -> &'static str {
        match self {
            ViolationKind::AssetMissingPreview | ViolationKind::ArchiveMissingPreview => {
                "Run `psdkeep fix` to generate the preview"
            }
            ViolationKind::AssetNotArchived => {
                "PSD files are very large; run `psdkeep fix` to compress it"
            }
            ViolationKind::RedundantOriginal => {
                "Delete the PSD from your branch or run `psdkeep fix`"
            }
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single non-compliant file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path relative to the audited root
    pub path: PathBuf,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: PathBuf, kind: ViolationKind) -> Self {
        Self { path, kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\"", self.kind.message(), self.path.display())
    }
}
