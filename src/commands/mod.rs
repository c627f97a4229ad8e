//! Subcommand handlers

pub mod audit;
pub mod fix;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use psdkeep::config::{Config, ConfigWarning};
use psdkeep::PsdkeepError;

use crate::ui::blocks::warning::render_config_warnings;
use crate::ui::context::UiContext;
use crate::ui::json::{config_warning_event, emit};

/// Exit status after an interrupted walk (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;

/// The root to walk: the given path, or the current directory.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("cannot read the current directory")?,
    };
    if !root.is_dir() {
        return Err(PsdkeepError::DirectoryNotFound { path: root }.into());
    }
    Ok(root)
}

/// Load the config for `root`; parse errors stop the command.
pub fn load_config(root: &Path) -> Result<(Config, Vec<ConfigWarning>)> {
    Ok(Config::load_for_root(root)?)
}

pub fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        for warning in warnings {
            let _ = emit(config_warning_event(warning));
        }
    } else if !warnings.is_empty() {
        eprint!("{}", render_config_warnings(warnings, ui.color, ui.unicode));
    }
}

/// Ctrl+C raises the returned flag; the walk stops before the next entry.
/// A second Ctrl+C exits immediately.
pub fn install_interrupt_flag() -> Result<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();

    ctrlc::set_handler(move || {
        if flag.swap(true, Ordering::SeqCst) {
            std::process::exit(EXIT_INTERRUPTED);
        }
    })
    .context("failed to install the Ctrl+C handler")?;

    Ok(interrupted)
}
