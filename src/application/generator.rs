//! Artifact generator
//!
//! Wraps the archiver and preview renderer. Every step that deletes an asset
//! first waits until the file it depends on (archive or preview) is present
//! and non-empty, so an asset is never removed before its replacement is
//! durable.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::domain::ports::{Archiver, PreviewRenderer};
use crate::domain::services::find_companion;
use crate::domain::value_objects::{
    with_extension, Action, ActionOutcome, ASSET_EXTENSION, PREVIEW_EXTENSION,
};
use crate::error::{PsdkeepError, PsdkeepResult};

/// Bounded poll for a generated file to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Re-checks after the first look
    pub attempts: u32,
    /// Sleep before each re-check
    pub interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            interval: Duration::from_secs(1),
        }
    }
}

impl WaitPolicy {
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self { attempts, interval }
    }

    /// Re-run `probe` until it yields a value, sleeping `interval` between
    /// tries, at most `attempts` times after the first.
    pub fn wait_until<T>(&self, mut probe: impl FnMut() -> Option<T>) -> Option<T> {
        if let Some(found) = probe() {
            return Some(found);
        }
        for _ in 0..self.attempts {
            thread::sleep(self.interval);
            if let Some(found) = probe() {
                return Some(found);
            }
        }
        None
    }

    /// Block until `path` is a non-empty regular file, or give up.
    pub fn wait_for_file(&self, path: &Path) -> bool {
        self.wait_until(|| is_ready(path).then_some(())).is_some()
    }

    fn exhausted(&self, path: &Path) -> PsdkeepError {
        PsdkeepError::RetryExhausted {
            path: path.to_path_buf(),
            attempts: self.attempts,
        }
    }
}

fn is_ready(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

/// How `generate_preview` disposed of the asset after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// Archive already existed; the asset was deleted
    OriginalRemoved { preview: PathBuf },
    /// Asset was archived, then deleted
    Archived { preview: PathBuf, archive: PathBuf },
}

impl PreviewOutcome {
    pub fn preview(&self) -> &Path {
        match self {
            PreviewOutcome::OriginalRemoved { preview } | PreviewOutcome::Archived { preview, .. } => {
                preview
            }
        }
    }
}

/// Produces archives and previews through the external tools.
pub struct ArtifactGenerator<A, R>
where
    A: Archiver,
    R: PreviewRenderer,
{
    archiver: A,
    renderer: R,
    archive_extension: String,
    wait: WaitPolicy,
}

impl<A, R> ArtifactGenerator<A, R>
where
    A: Archiver,
    R: PreviewRenderer,
{
    /// `archive_extension` must be normalized (lowercase, leading period).
    pub fn new(archiver: A, renderer: R, archive_extension: impl Into<String>) -> Self {
        Self {
            archiver,
            renderer,
            archive_extension: archive_extension.into(),
            wait: WaitPolicy::default(),
        }
    }

    pub fn with_wait_policy(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        self.wait
    }

    pub fn archive_path(&self, asset: &Path) -> PathBuf {
        with_extension(asset, &self.archive_extension)
    }

    /// The asset's archive, matched like the prober matches it, when it is
    /// a non-empty regular file.
    pub fn durable_archive(&self, asset: &Path) -> PsdkeepResult<Option<PathBuf>> {
        Ok(find_companion(asset, &self.archive_extension)?.filter(|archive| is_ready(archive)))
    }

    /// Archive `asset` at maximum compression, then delete it.
    ///
    /// A partial archive left behind by a failing tool is not cleaned up.
    pub fn compress_and_remove(&self, asset: &Path) -> PsdkeepResult<PathBuf> {
        let archive = self.archive_path(asset);
        self.archiver.compress(asset, &archive)?;
        if !self.wait.wait_for_file(&archive) {
            return Err(self.wait.exhausted(&archive));
        }
        fs::remove_file(asset)?;
        Ok(archive)
    }

    /// Extract `archive` next to itself and wait for the restored asset.
    ///
    /// Returns the restored asset, or `None` when it never appeared.
    pub fn extract_and_wait(&self, archive: &Path) -> PsdkeepResult<Option<PathBuf>> {
        let dest = match archive.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.archiver.extract(archive, dest)?;
        Ok(self.wait.wait_until(|| {
            find_companion(archive, ASSET_EXTENSION)
                .ok()
                .flatten()
                .filter(|asset| is_ready(asset))
        }))
    }

    /// Render the preview for `asset`, wait for it, then either delete the
    /// asset (durable archive already present) or archive and delete it.
    ///
    /// An empty or non-file archive counts as absent and is overwritten.
    pub fn generate_preview(&self, asset: &Path) -> PsdkeepResult<PreviewOutcome> {
        let preview = with_extension(asset, PREVIEW_EXTENSION);
        self.renderer.render(asset, &preview)?;
        if !self.wait.wait_for_file(&preview) {
            return Err(self.wait.exhausted(&preview));
        }

        if self.durable_archive(asset)?.is_some() {
            fs::remove_file(asset)?;
            Ok(PreviewOutcome::OriginalRemoved { preview })
        } else {
            let archive = self.compress_and_remove(asset)?;
            Ok(PreviewOutcome::Archived { preview, archive })
        }
    }

    /// Delete an asset whose archive and preview both exist.
    pub fn delete_redundant(&self, asset: &Path) -> PsdkeepResult<()> {
        if self.durable_archive(asset)?.is_none() {
            return Err(self.wait.exhausted(&self.archive_path(asset)));
        }
        fs::remove_file(asset)?;
        Ok(())
    }

    /// Run the whole chain for `action` against `path`.
    pub fn apply(&self, action: Action, path: &Path) -> PsdkeepResult<ActionOutcome> {
        match action {
            Action::NoOp => Ok(ActionOutcome::new()),
            Action::GeneratePreview => {
                Ok(preview_outcome(path, self.generate_preview(path)?))
            }
            Action::ExtractThenGeneratePreview => {
                let Some(asset) = self.extract_and_wait(path)? else {
                    return Err(self.wait.exhausted(&with_extension(path, ASSET_EXTENSION)));
                };
                let restored = ActionOutcome::new().created(asset.clone());
                Ok(restored.merge(preview_outcome(&asset, self.generate_preview(&asset)?)))
            }
            Action::CompressAndRemove => {
                let archive = self.compress_and_remove(path)?;
                Ok(ActionOutcome::new()
                    .created(archive)
                    .removed(path.to_path_buf()))
            }
            Action::DeleteRedundantOriginal => {
                self.delete_redundant(path)?;
                Ok(ActionOutcome::new().removed(path.to_path_buf()))
            }
        }
    }
}

fn preview_outcome(asset: &Path, outcome: PreviewOutcome) -> ActionOutcome {
    match outcome {
        PreviewOutcome::OriginalRemoved { preview } => ActionOutcome::new()
            .created(preview)
            .removed(asset.to_path_buf()),
        PreviewOutcome::Archived { preview, archive } => ActionOutcome::new()
            .created(preview)
            .created(archive)
            .removed(asset.to_path_buf()),
    }
}
