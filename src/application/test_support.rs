//! In-process stand-ins for the external tools, used by unit tests.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::application::WaitPolicy;
use crate::domain::ports::{Archiver, PreviewRenderer, WalkEvent, WalkEventSink};
use crate::domain::value_objects::{with_extension, ASSET_EXTENSION};
use crate::error::{PsdkeepError, PsdkeepResult};

const NAME_HEADER: &str = "name:";

pub fn fast_wait() -> WaitPolicy {
    WaitPolicy::new(1, Duration::from_millis(1))
}

/// Stores `name:<file name>\n<bytes>` so extraction restores the original
/// name, like a real archive. Headerless archives restore as `<stem>.psd`.
#[derive(Default)]
pub struct FakeArchiver {
    compress_calls: Cell<usize>,
    extract_calls: Cell<usize>,
}

impl FakeArchiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compress_calls(&self) -> usize {
        self.compress_calls.get()
    }

    pub fn extract_calls(&self) -> usize {
        self.extract_calls.get()
    }
}

impl Archiver for FakeArchiver {
    fn name(&self) -> &str {
        "fake-archiver"
    }

    fn compress(&self, source: &Path, archive: &Path) -> PsdkeepResult<()> {
        self.compress_calls.set(self.compress_calls.get() + 1);
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut content = format!("{}{}\n", NAME_HEADER, name).into_bytes();
        content.extend(fs::read(source)?);
        fs::write(archive, content)?;
        Ok(())
    }

    fn extract(&self, archive: &Path, dest_dir: &Path) -> PsdkeepResult<()> {
        self.extract_calls.set(self.extract_calls.get() + 1);
        let content = fs::read(archive)?;
        let text = String::from_utf8_lossy(&content);
        let (target, body) = match text.strip_prefix(NAME_HEADER).and_then(|rest| rest.split_once('\n')) {
            Some((name, body)) => (dest_dir.join(name), body.as_bytes().to_vec()),
            None => {
                let restored = with_extension(archive, ASSET_EXTENSION);
                let name = restored.file_name().unwrap_or_default().to_os_string();
                (dest_dir.join(name), content.clone())
            }
        };
        fs::write(target, body)?;
        Ok(())
    }
}

/// Reports success but never writes an archive or an extracted file.
#[derive(Default)]
pub struct SilentArchiver {
    extract_calls: Cell<usize>,
}

impl SilentArchiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extract_calls(&self) -> usize {
        self.extract_calls.get()
    }
}

impl Archiver for SilentArchiver {
    fn name(&self) -> &str {
        "silent-archiver"
    }

    fn compress(&self, _source: &Path, _archive: &Path) -> PsdkeepResult<()> {
        Ok(())
    }

    fn extract(&self, _archive: &Path, _dest_dir: &Path) -> PsdkeepResult<()> {
        self.extract_calls.set(self.extract_calls.get() + 1);
        Ok(())
    }
}

/// Archiver whose tool always exits non-zero.
pub struct FailingArchiver;

impl Archiver for FailingArchiver {
    fn name(&self) -> &str {
        "failing-archiver"
    }

    fn compress(&self, source: &Path, _archive: &Path) -> PsdkeepResult<()> {
        Err(PsdkeepError::ToolFailed {
            tool: self.name().to_string(),
            path: source.to_path_buf(),
            message: "exit status: 2".to_string(),
        })
    }

    fn extract(&self, archive: &Path, _dest_dir: &Path) -> PsdkeepResult<()> {
        Err(PsdkeepError::ToolFailed {
            tool: self.name().to_string(),
            path: archive.to_path_buf(),
            message: "exit status: 2".to_string(),
        })
    }
}

/// Writes a small placeholder PNG.
#[derive(Default)]
pub struct FakeRenderer {
    calls: Cell<usize>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PreviewRenderer for FakeRenderer {
    fn name(&self) -> &str {
        "fake-renderer"
    }

    fn render(&self, _source: &Path, preview: &Path) -> PsdkeepResult<()> {
        self.calls.set(self.calls.get() + 1);
        fs::write(preview, b"\x89PNG")?;
        Ok(())
    }
}

/// Reports success but never produces a file.
pub struct SilentRenderer;

impl PreviewRenderer for SilentRenderer {
    fn name(&self) -> &str {
        "silent-renderer"
    }

    fn render(&self, _source: &Path, _preview: &Path) -> PsdkeepResult<()> {
        Ok(())
    }
}

/// Renderer whose tool always exits non-zero.
pub struct FailingRenderer;

impl PreviewRenderer for FailingRenderer {
    fn name(&self) -> &str {
        "failing-renderer"
    }

    fn render(&self, source: &Path, _preview: &Path) -> PsdkeepResult<()> {
        Err(PsdkeepError::ToolFailed {
            tool: self.name().to_string(),
            path: source.to_path_buf(),
            message: "unsupported layer type".to_string(),
        })
    }
}

/// Records every event it receives.
#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<WalkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<WalkEvent> {
        self.events.borrow().clone()
    }
}

impl WalkEventSink for RecordingSink {
    fn on_event(&self, event: WalkEvent) {
        self.events.borrow_mut().push(event);
    }
}
