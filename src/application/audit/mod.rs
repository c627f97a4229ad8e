//! Audit Use Case
//!
//! Read-only counterpart of reconcile: reports every file that breaks the
//! "archived and previewed" invariant without touching the tree.

mod options;
mod report;
mod use_case;

pub use options::AuditOptions;
pub use report::AuditReport;
pub use use_case::Auditor;
