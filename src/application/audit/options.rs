//! Audit options

/// Options for the audit command
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Stop at the first violation instead of collecting all of them
    pub fail_fast: bool,
}

impl AuditOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}
