//! Domain Policies
//!
//! Business rules expressed as pure functions.

mod decision;

pub use decision::{decide, verdict};
