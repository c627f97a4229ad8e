//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and I/O work.
//!
//! ## Structure
//!
//! - `archiver/` - 7-Zip command line
//! - `preview/` - Preview renderer command line
//! - `events/` - Event sinks (JSON)

pub mod archiver;
pub mod events;
pub mod preview;
pub mod process;

// Re-export for convenience
pub use archiver::SevenZipArchiver;
pub use events::JsonEventSink;
pub use preview::CommandPreviewRenderer;
