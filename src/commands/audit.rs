//! Audit command handler
//!
//! Read-only check for CI; exits non-zero when any file is out of place.

use std::path::Path;

use anyhow::Result;

use psdkeep::application::{AuditOptions, Auditor};
use psdkeep::domain::ports::WalkEventSink;
use psdkeep::infrastructure::JsonEventSink;
use psdkeep::presentation::{factory, ColorWhen};
use psdkeep::WalkMode;

use super::{install_interrupt_flag, load_config, report_config_warnings, resolve_root};
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::audit::{render_audit_header, render_audit_result};

/// Execute the audit command
pub fn cmd_audit(
    root: Option<&Path>,
    fail_fast: bool,
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
            render_audit_header(&root, fail_fast, ui.color, ui.unicode)
        );
    }

    let sink: Box<dyn WalkEventSink> = if json {
        Box::new(JsonEventSink::stdout(WalkMode::Audit))
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    };

    let walker = factory::create_walker(&root, &config, sink.as_ref()).with_interrupt(interrupted);
    let report = Auditor::new(walker).run(&AuditOptions::new().with_fail_fast(fail_fast))?;

    if !json {
        println!();
        print!("{}", render_audit_result(&report, ui.color, ui.unicode));
    }

    if !report.is_compliant() {
        std::process::exit(1);
    }
    if report.interrupted {
        std::process::exit(super::EXIT_INTERRUPTED);
    }

    Ok(())
}
