//! Traversal modes

use std::fmt;

/// Whether a walk repairs the tree or only reports on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkMode {
    /// Mutating pass that corrects non-compliant files
    Reconcile,
    /// Read-only pass that reports non-compliant files
    Audit,
}

impl WalkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalkMode::Reconcile => "fix",
            WalkMode::Audit => "audit",
        }
    }
}

impl fmt::Display for WalkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
