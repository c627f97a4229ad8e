//! Ignore list value object
//!
//! A fixed set of literal entry names the walker never descends into or
//! classifies. Matching is exact and case-sensitive; there is no pattern
//! syntax.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

/// Name of the per-tree configuration file. Always ignored.
pub const CONFIG_FILE_NAME: &str = ".psdkeep.toml";

/// Names ignored when the configuration does not say otherwise.
pub const DEFAULT_IGNORED_NAMES: &[&str] = &[
    ".git",
    ".gitignore",
    "node_modules",
    "npm-debug.log",
    "package.json",
    "README.md",
    CONFIG_FILE_NAME,
];

/// Set of entry names excluded from traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreList {
    names: BTreeSet<String>,
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_NAMES.iter().copied())
    }
}

impl IgnoreList {
    /// Build a list from the given names. The config file name is always
    /// included.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        names.insert(CONFIG_FILE_NAME.to_string());
        Self { names }
    }

    /// Create an empty list (only the config file is ignored).
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    /// Add more names.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    /// Check whether an entry name is ignored.
    pub fn is_ignored(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    /// Drop ignored entries from a directory listing, keeping listing order.
    pub fn retain<T>(&self, mut entries: Vec<T>, name_of: impl Fn(&T) -> OsString) -> Vec<T> {
        entries.retain(|entry| !self.is_ignored(&name_of(entry)));
        entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
