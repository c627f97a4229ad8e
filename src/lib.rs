//! psdkeep - keeps PSD design assets archived and previewed
//!
//! Every `.psd` asset in a tree should end up as a compressed archive with a
//! PNG preview next to it. The library classifies each file by which
//! companions exist and either repairs the tree (`Reconciler`) or reports what
//! is out of place (`Auditor`).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ArtifactGenerator, AuditOptions, AuditReport, Auditor, ReconcileOptions, ReconcileResult,
    Reconciler, TreeWalker, WaitPolicy,
};
pub use config::Config;
pub use domain::policies::{decide, verdict};
pub use domain::value_objects::{
    extension_of, with_extension, Action, FileKind, FileState, IgnoreList, Violation,
    ViolationKind, WalkMode,
};
pub use error::{PsdkeepError, PsdkeepResult};
