//! Preview renderer implementations

pub mod command;

pub use command::CommandPreviewRenderer;
