//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Reconciler` - walks the tree and repairs non-compliant files
//! - `Auditor` - walks the tree and reports non-compliant files
//!
//! ## Services
//!
//! - `ArtifactGenerator` - drives the archiver and preview renderer
//! - `TreeWalker` - depth-first traversal shared by both use cases

pub mod audit;
pub mod generator;
pub mod reconcile;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_support;

pub use audit::{AuditOptions, AuditReport, Auditor};
pub use generator::{ArtifactGenerator, PreviewOutcome, WaitPolicy};
pub use reconcile::{
    ActionIssue, AppliedAction, PlannedAction, ReconcileOptions, ReconcileResult, Reconciler,
};
pub use walker::{TreeWalker, WalkProgress};
