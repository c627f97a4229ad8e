//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod action;
mod extension;
mod file_kind;
mod ignore_list;
mod violation;
mod walk_mode;

pub use action::{Action, ActionOutcome};
pub use extension::{
    extension_of, normalize_extension, with_extension, ASSET_EXTENSION,
    DEFAULT_ARCHIVE_EXTENSION, PREVIEW_EXTENSION,
};
pub use file_kind::{FileKind, FileState};
pub use ignore_list::{IgnoreList, CONFIG_FILE_NAME, DEFAULT_IGNORED_NAMES};
pub use violation::{Violation, ViolationKind};
pub use walk_mode::WalkMode;
