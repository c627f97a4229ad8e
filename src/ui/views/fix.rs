//! Fix command UI views

use std::path::Path;

use psdkeep::application::ReconcileResult;
use psdkeep::domain::value_objects::Action;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_fix_header(
    root: &Path,
    archiver: &str,
    renderer: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "psdkeep fix (dry run)"
    } else {
        "psdkeep fix"
    };
    let mut header = CommandHeader::new(Icon::Fix, title);
    header.add("Root", root.display().to_string());
    header.add("Archiver", archiver);
    header.add("Preview", renderer);
    header.render(supports_color, supports_unicode)
}

pub fn render_fix_result(
    result: &ReconcileResult,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if !result.is_success() {
        ResultSummary::failure("Fix Finished With Errors")
    } else if result.interrupted {
        ResultSummary::failure("Fix Interrupted")
    } else if dry_run {
        ResultSummary::success("Dry Run Complete")
    } else if result.is_clean() {
        ResultSummary::success("Already Compliant")
    } else {
        ResultSummary::success("Fix Complete")
    };

    summary.add_stat("files checked", result.files_checked);
    if dry_run {
        summary.add_nonzero_stat("actions planned", result.planned.len());
    }
    summary.add_nonzero_stat(
        "previews generated",
        result.count_applied(Action::GeneratePreview),
    );
    summary.add_nonzero_stat(
        "archives extracted for preview",
        result.count_applied(Action::ExtractThenGeneratePreview),
    );
    summary.add_nonzero_stat(
        "PSD files archived",
        result.count_applied(Action::CompressAndRemove),
    );
    summary.add_nonzero_stat(
        "redundant PSD files removed",
        result.count_applied(Action::DeleteRedundantOriginal),
    );
    summary.add_nonzero_stat("failed", result.failed.len());

    for issue in &result.deferred {
        summary.add_warning(format!("{} deferred: {}", issue.path.display(), issue.message));
    }

    if !result.failed.is_empty() {
        summary.with_next_step("fix the tool errors above, then run `psdkeep fix` again");
    } else if !result.deferred.is_empty() || result.interrupted {
        summary.with_next_step("run `psdkeep fix` again to finish the remaining files");
    } else if dry_run && !result.planned.is_empty() {
        summary.with_next_step("run `psdkeep fix` to apply these changes");
    }

    summary.render(supports_color, supports_unicode)
}
