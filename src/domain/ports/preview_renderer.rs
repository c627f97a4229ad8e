//! Preview renderer port

use std::path::Path;

use crate::error::PsdkeepResult;

/// External tool that rasterizes an asset into a PNG.
///
/// Returning `Ok` only means the tool reported success; the preview may not
/// be visible on disk yet. Callers wait for it before relying on it.
pub trait PreviewRenderer {
    /// Display name used in messages
    fn name(&self) -> &str;

    /// Render `source` into `preview`.
    fn render(&self, source: &Path, preview: &Path) -> PsdkeepResult<()>;
}

impl<T: PreviewRenderer + ?Sized> PreviewRenderer for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&self, source: &Path, preview: &Path) -> PsdkeepResult<()> {
        (**self).render(source, preview)
    }
}
