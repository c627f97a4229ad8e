//! Audit command UI views

use std::path::Path;

use psdkeep::application::AuditReport;
use psdkeep::domain::value_objects::ViolationKind;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_audit_header(
    root: &Path,
    fail_fast: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Audit, "psdkeep audit");
    header.add("Root", root.display().to_string());
    if fail_fast {
        header.add("Mode", "stop at first violation");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_audit_result(
    report: &AuditReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.is_compliant() && !report.interrupted {
        ResultSummary::success("Audit Passed")
    } else if report.is_compliant() {
        ResultSummary::failure("Audit Interrupted")
    } else if report.stopped_early {
        ResultSummary::failure("Audit Failed (stopped at first violation)")
    } else {
        ResultSummary::failure("Audit Failed")
    };

    summary.add_stat("files checked", report.files_checked);
    for (kind, label) in [
        (ViolationKind::AssetMissingPreview, "PSD files without preview"),
        (ViolationKind::AssetNotArchived, "PSD files not archived"),
        (ViolationKind::RedundantOriginal, "PSD files already archived"),
        (ViolationKind::ArchiveMissingPreview, "archives without preview"),
    ] {
        summary.add_nonzero_stat(label, report.count(kind));
    }

    if !report.is_compliant() {
        summary.with_next_step("run `psdkeep fix` to repair these files");
    }

    summary.render(supports_color, supports_unicode)
}
