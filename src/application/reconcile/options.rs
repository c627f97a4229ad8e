//! Reconcile options

/// Options for the fix command
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Record actions without running them
    pub dry_run: bool,
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
