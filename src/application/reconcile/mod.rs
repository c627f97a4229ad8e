//! Reconcile Use Case
//!
//! Drives every asset toward `{archive, preview}`:
//! - Classifying each file through the decision table
//! - Running the chosen action through the artifact generator
//! - Recording applied, planned, deferred and failed actions

mod options;
mod result;
mod use_case;

pub use options::ReconcileOptions;
pub use result::{ActionIssue, AppliedAction, PlannedAction, ReconcileResult};
pub use use_case::Reconciler;
