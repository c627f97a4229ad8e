//! Walk Event Port
//!
//! Provides an observable interface for reconcile and audit walks.
//! Enables console progress, JSON event streams, and debugging.

use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::{Action, ActionOutcome, FileState, Violation, WalkMode};

/// Why the walker passed over an entry without classifying it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Entry disappeared between listing and inspection
    Vanished,
    /// Symbolic link (never followed)
    Symlink,
    /// Socket, FIFO, device or similar
    SpecialFile,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Vanished => write!(f, "vanished"),
            SkipReason::Symlink => write!(f, "symbolic link"),
            SkipReason::SpecialFile => write!(f, "special file"),
        }
    }
}

/// Counts reported when a walk ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub files_checked: usize,
    pub changed: usize,
    pub planned: usize,
    pub deferred: usize,
    pub failed: usize,
    pub violations: usize,
    pub interrupted: bool,
}

/// Event emitted during a walk. Paths are relative to the walk root.
#[derive(Debug, Clone)]
pub enum WalkEvent {
    /// Walk started
    Started {
        root: PathBuf,
        mode: WalkMode,
        dry_run: bool,
    },

    /// Walker descended into a directory
    DirectoryEntered { path: PathBuf },

    /// A regular file was probed
    FileClassified { path: PathBuf, state: FileState },

    /// Dry run: action that would be applied
    ActionPlanned { path: PathBuf, action: Action },

    /// Action is about to run
    ActionStarted { path: PathBuf, action: Action },

    /// Action ran to completion
    ActionCompleted {
        path: PathBuf,
        action: Action,
        outcome: ActionOutcome,
    },

    /// Action stopped before deleting anything (a generated file never appeared)
    ActionDeferred {
        path: PathBuf,
        action: Action,
        reason: String,
    },

    /// External tool failed
    ActionFailed {
        path: PathBuf,
        action: Action,
        error: String,
    },

    /// Audit found a non-compliant file
    ViolationFound { violation: Violation },

    /// Entry was not classified
    EntrySkipped { path: PathBuf, reason: SkipReason },

    /// Walk stopped early on request
    Interrupted,

    /// Walk completed
    Completed { mode: WalkMode, summary: WalkSummary },
}

/// Trait for receiving walk events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait WalkEventSink {
    /// Handle a walk event
    fn on_event(&self, event: WalkEvent);

    /// Check if this sink wants per-file classification events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl WalkEventSink for NoopEventSink {
    fn on_event(&self, _event: WalkEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
