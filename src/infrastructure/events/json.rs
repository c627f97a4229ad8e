//! JSON Event Sink
//!
//! Outputs walk events as NDJSON for CI/automation consumption.

use crate::domain::ports::{WalkEvent, WalkEventSink};
use crate::domain::value_objects::WalkMode;
use serde_json::json;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(mode: WalkMode) -> Self {
        Self::with_writer(mode, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(mode: WalkMode, writer: W) -> Self {
        Self {
            command: mode.as_str(),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| display(p)).collect()
}

impl WalkEventSink for JsonEventSink {
    fn on_event(&self, event: WalkEvent) {
        let command = self.command;
        let json = match event {
            WalkEvent::Started {
                root,
                mode: _,
                dry_run,
            } => json!({
                "event": "start",
                "command": command,
                "root": display(&root),
                "dry_run": dry_run,
            }),

            WalkEvent::DirectoryEntered { path } => json!({
                "event": "directory",
                "command": command,
                "path": display(&path),
            }),

            WalkEvent::FileClassified { path, state } => json!({
                "event": "file",
                "command": command,
                "path": display(&path),
                "kind": state.kind.as_str(),
                "has_preview": state.has_preview,
                "has_archive": state.has_archive,
                "has_asset": state.has_asset,
            }),

            WalkEvent::ActionPlanned { path, action } => json!({
                "event": "item_planned",
                "command": command,
                "path": display(&path),
                "action": action.code(),
            }),

            WalkEvent::ActionStarted { path, action } => json!({
                "event": "item_start",
                "command": command,
                "path": display(&path),
                "action": action.code(),
            }),

            WalkEvent::ActionCompleted {
                path,
                action,
                outcome,
            } => json!({
                "event": "item_done",
                "command": command,
                "path": display(&path),
                "action": action.code(),
                "created": display_all(&outcome.created),
                "removed": display_all(&outcome.removed),
            }),

            WalkEvent::ActionDeferred {
                path,
                action,
                reason,
            } => json!({
                "event": "item_deferred",
                "command": command,
                "path": display(&path),
                "action": action.code(),
                "reason": reason,
            }),

            WalkEvent::ActionFailed {
                path,
                action,
                error,
            } => json!({
                "event": "item_error",
                "command": command,
                "path": display(&path),
                "action": action.code(),
                "error": error,
            }),

            WalkEvent::ViolationFound { violation } => json!({
                "event": "violation",
                "command": command,
                "path": display(&violation.path),
                "code": violation.kind.code(),
                "message": violation.kind.message(),
                "hint": violation.kind.hint(),
            }),

            WalkEvent::EntrySkipped { path, reason } => json!({
                "event": "item_skipped",
                "command": command,
                "path": display(&path),
                "reason": reason.to_string(),
            }),

            WalkEvent::Interrupted => json!({
                "event": "interrupted",
                "command": command,
            }),

            WalkEvent::Completed { mode, summary } => {
                let status = if summary.interrupted {
                    "interrupted"
                } else if summary.failed > 0 || summary.violations > 0 {
                    "failure"
                } else if summary.deferred > 0 {
                    "partial"
                } else {
                    "success"
                };
                match mode {
                    WalkMode::Reconcile => json!({
                        "event": "complete",
                        "command": command,
                        "status": status,
                        "files_checked": summary.files_checked,
                        "changed": summary.changed,
                        "planned": summary.planned,
                        "deferred": summary.deferred,
                        "failed": summary.failed,
                    }),
                    WalkMode::Audit => json!({
                        "event": "complete",
                        "command": command,
                        "status": status,
                        "files_checked": summary.files_checked,
                        "violations": summary.violations,
                    }),
                }
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
