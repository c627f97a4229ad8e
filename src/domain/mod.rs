//! Domain Layer
//!
//! The reconciliation rules, free of external tools.
//!
//! ## Structure
//!
//! - `value_objects/` - Extensions, file kinds, actions, violations, ignore list
//! - `policies/` - The decision table (reconcile action and audit verdict)
//! - `services/` - The state prober
//! - `ports/` - Interfaces for the archiver, preview renderer and event sinks

pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
