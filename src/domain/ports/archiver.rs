//! Archiver port
//!
//! Abstraction over the external compressor. Both operations block until the
//! tool exits.

use std::path::Path;

use crate::error::PsdkeepResult;

/// External archive tool.
///
/// Implementations:
/// - `SevenZipArchiver` - the `7za`/`7z` command-line tool
pub trait Archiver {
    /// Display name used in messages ("7-Zip")
    fn name(&self) -> &str;

    /// Create `archive` holding `source` at maximum compression.
    fn compress(&self, source: &Path, archive: &Path) -> PsdkeepResult<()>;

    /// Extract the contents of `archive` into `dest_dir`.
    fn extract(&self, archive: &Path, dest_dir: &Path) -> PsdkeepResult<()>;
}

impl<T: Archiver + ?Sized> Archiver for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compress(&self, source: &Path, archive: &Path) -> PsdkeepResult<()> {
        (**self).compress(source, archive)
    }

    fn extract(&self, archive: &Path, dest_dir: &Path) -> PsdkeepResult<()> {
        (**self).extract(archive, dest_dir)
    }
}
