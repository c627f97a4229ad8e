//! Tree walker
//!
//! Depth-first traversal shared by reconcile and audit mode. Siblings are
//! visited in directory listing order (not sorted). Ignored names, symbolic
//! links and special files are never classified.

use std::fs;
use std::io;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{SkipReason, WalkEvent, WalkEventSink};
use crate::domain::services::StateProber;
use crate::domain::value_objects::{FileState, IgnoreList};
use crate::error::{PsdkeepError, PsdkeepResult};

/// How far a walk got.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkProgress {
    /// Regular files probed
    pub files_checked: usize,
    /// The visitor asked to stop
    pub stopped_early: bool,
    /// The interrupt flag was raised
    pub interrupted: bool,
}

/// Walks a root directory and hands each regular file to a visitor.
pub struct TreeWalker<'a> {
    root: PathBuf,
    prober: StateProber,
    ignore: IgnoreList,
    sink: &'a dyn WalkEventSink,
    interrupt: Option<Arc<AtomicBool>>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(
        root: impl Into<PathBuf>,
        prober: StateProber,
        ignore: IgnoreList,
        sink: &'a dyn WalkEventSink,
    ) -> Self {
        Self {
            root: root.into(),
            prober,
            ignore,
            sink,
            interrupt: None,
        }
    }

    /// Stop before the next entry once `flag` becomes `true`.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sink(&self) -> &'a dyn WalkEventSink {
        self.sink
    }

    /// `path` relative to the root, for reporting.
    pub fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    /// Visit every regular file under the root.
    ///
    /// The visitor receives the file's path (joined onto the root) and its
    /// probed state. I/O errors while listing or probing abort the walk.
    pub fn walk<F>(&self, mut visit: F) -> PsdkeepResult<WalkProgress>
    where
        F: FnMut(&Path, &FileState) -> ControlFlow<()>,
    {
        if !self.root.is_dir() {
            return Err(PsdkeepError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }

        let mut progress = WalkProgress::default();
        // Stop reasons are recorded on `progress`; the flow value only unwinds.
        let _ = self.walk_dir(&self.root, &mut visit, &mut progress)?;
        Ok(progress)
    }

    fn walk_dir<F>(
        &self,
        dir: &Path,
        visit: &mut F,
        progress: &mut WalkProgress,
    ) -> PsdkeepResult<ControlFlow<()>>
    where
        F: FnMut(&Path, &FileState) -> ControlFlow<()>,
    {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries.collect::<io::Result<Vec<_>>>()?,
            Err(e) if e.kind() == io::ErrorKind::NotFound && dir != self.root => {
                self.skip(dir, SkipReason::Vanished);
                return Ok(ControlFlow::Continue(()));
            }
            Err(e) => return Err(e.into()),
        };
        let entries = self.ignore.retain(entries, |entry| entry.file_name());

        for entry in entries {
            if self.interrupted() {
                progress.interrupted = true;
                return Ok(ControlFlow::Break(()));
            }

            let path = entry.path();
            let file_type = match fs::symlink_metadata(&path) {
                Ok(meta) => meta.file_type(),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    self.skip(&path, SkipReason::Vanished);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if file_type.is_symlink() {
                self.skip(&path, SkipReason::Symlink);
            } else if file_type.is_dir() {
                if self.sink.wants_detailed_events() {
                    self.sink.on_event(WalkEvent::DirectoryEntered {
                        path: self.relative(&path),
                    });
                }
                if self.walk_dir(&path, visit, progress)?.is_break() {
                    return Ok(ControlFlow::Break(()));
                }
            } else if file_type.is_file() {
                let state = match self.prober.probe(&path) {
                    Ok(state) => state,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        self.skip(&path, SkipReason::Vanished);
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                progress.files_checked += 1;

                if self.sink.wants_detailed_events() {
                    self.sink.on_event(WalkEvent::FileClassified {
                        path: self.relative(&path),
                        state,
                    });
                }
                if visit(&path, &state).is_break() {
                    progress.stopped_early = true;
                    return Ok(ControlFlow::Break(()));
                }
            } else {
                self.skip(&path, SkipReason::SpecialFile);
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    fn skip(&self, path: &Path, reason: SkipReason) {
        if self.sink.wants_detailed_events() {
            self.sink.on_event(WalkEvent::EntrySkipped {
                path: self.relative(path),
                reason,
            });
        }
    }
}
