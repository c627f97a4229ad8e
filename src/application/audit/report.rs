//! Audit report

use crate::domain::ports::WalkSummary;
use crate::domain::value_objects::{Violation, ViolationKind};

/// Result of an audit walk
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub violations: Vec<Violation>,
    pub files_checked: usize,
    /// Stopped at the first violation (`--fail-fast`)
    pub stopped_early: bool,
    pub interrupted: bool,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn summary(&self) -> WalkSummary {
        WalkSummary {
            files_checked: self.files_checked,
            violations: self.violations.len(),
            interrupted: self.interrupted,
            ..WalkSummary::default()
        }
    }
}
