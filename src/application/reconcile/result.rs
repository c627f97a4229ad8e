//! Reconcile result types

use std::path::PathBuf;

use crate::domain::ports::WalkSummary;
use crate::domain::value_objects::{Action, ActionOutcome};

/// An action that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedAction {
    pub path: PathBuf,
    pub action: Action,
    pub outcome: ActionOutcome,
}

/// An action a dry run would have taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAction {
    pub path: PathBuf,
    pub action: Action,
}

/// An action that was deferred or failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionIssue {
    pub path: PathBuf,
    pub action: Action,
    pub message: String,
}

/// Result of a reconcile walk. Paths are relative to the root.
#[derive(Debug, Clone, Default)]
pub struct ReconcileResult {
    pub applied: Vec<AppliedAction>,
    pub planned: Vec<PlannedAction>,
    /// A generated file never appeared; nothing was deleted
    pub deferred: Vec<ActionIssue>,
    /// External tool failures
    pub failed: Vec<ActionIssue>,
    pub files_checked: usize,
    pub interrupted: bool,
}

impl ReconcileResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_applied(&mut self, path: PathBuf, action: Action, outcome: ActionOutcome) {
        self.applied.push(AppliedAction {
            path,
            action,
            outcome,
        });
    }

    pub fn add_planned(&mut self, path: PathBuf, action: Action) {
        self.planned.push(PlannedAction { path, action });
    }

    pub fn add_deferred(&mut self, path: PathBuf, action: Action, message: String) {
        self.deferred.push(ActionIssue {
            path,
            action,
            message,
        });
    }

    pub fn add_failed(&mut self, path: PathBuf, action: Action, message: String) {
        self.failed.push(ActionIssue {
            path,
            action,
            message,
        });
    }

    /// Number of applied actions of the given kind
    pub fn count_applied(&self, action: Action) -> usize {
        self.applied.iter().filter(|a| a.action == action).count()
    }

    /// True when the tree was already compliant (nothing to do or plan)
    pub fn is_clean(&self) -> bool {
        self.applied.is_empty()
            && self.planned.is_empty()
            && self.deferred.is_empty()
            && self.failed.is_empty()
    }

    /// Deferred actions are warnings; only tool failures fail the run.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> WalkSummary {
        WalkSummary {
            files_checked: self.files_checked,
            changed: self.applied.len(),
            planned: self.planned.len(),
            deferred: self.deferred.len(),
            failed: self.failed.len(),
            violations: 0,
            interrupted: self.interrupted,
        }
    }
}
