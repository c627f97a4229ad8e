//! Fix command handler
//!
//! Reconciles the tree: every asset ends up archived with a preview.

use std::path::Path;

use anyhow::Result;

use psdkeep::application::{ReconcileOptions, Reconciler};
use psdkeep::domain::ports::WalkEventSink;
use psdkeep::infrastructure::JsonEventSink;
use psdkeep::presentation::{factory, ColorWhen};
use psdkeep::WalkMode;

use super::{install_interrupt_flag, load_config, report_config_warnings, resolve_root};
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::fix::{render_fix_header, render_fix_result};

/// Execute the fix command
pub fn cmd_fix(
    root: Option<&Path>,
    dry_run: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let root = resolve_root(root)?;
    let (config, warnings) = load_config(&root)?;
    let ui = UiContext::new(json, verbose, color, &config);
    report_config_warnings(&warnings, &ui);

    let interrupted = install_interrupt_flag()?;

    if !json {
        println!(
            "{}",
            render_fix_header(
                &root,
                &config.archiver.program,
                &config.preview.program,
                dry_run,
                ui.color,
                ui.unicode
            )
        );
    }

    let sink: Box<dyn WalkEventSink> = if json {
        Box::new(JsonEventSink::stdout(WalkMode::Reconcile))
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    };

    let walker = factory::create_walker(&root, &config, sink.as_ref()).with_interrupt(interrupted);
    let reconciler = Reconciler::new(walker, factory::create_generator(&config));
    let result = reconciler.run(&ReconcileOptions::new().with_dry_run(dry_run))?;

    if !json {
        println!();
        print!(
            "{}",
            render_fix_result(&result, dry_run, ui.color, ui.unicode)
        );
    }

    if !result.is_success() {
        std::process::exit(1);
    }
    if result.interrupted {
        std::process::exit(super::EXIT_INTERRUPTED);
    }

    Ok(())
}
