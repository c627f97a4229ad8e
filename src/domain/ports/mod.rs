//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archiver;
pub mod preview_renderer;
pub mod walk_events;

pub use archiver::Archiver;
pub use preview_renderer::PreviewRenderer;
pub use walk_events::{NoopEventSink, SkipReason, WalkEvent, WalkEventSink, WalkSummary};
