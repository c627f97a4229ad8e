//! Audit Use Case

use std::ops::ControlFlow;

use crate::application::walker::TreeWalker;
use crate::domain::policies::verdict;
use crate::domain::ports::WalkEvent;
use crate::domain::value_objects::{Violation, WalkMode};
use crate::error::PsdkeepResult;

use super::options::AuditOptions;
use super::report::AuditReport;

/// Audit use case - reports non-compliant files
pub struct Auditor<'a> {
    walker: TreeWalker<'a>,
}

impl<'a> Auditor<'a> {
    pub fn new(walker: TreeWalker<'a>) -> Self {
        Self { walker }
    }

    /// Walk the whole tree and collect violations.
    ///
    /// With `fail_fast` the walk stops at the first violation in traversal
    /// order.
    pub fn run(&self, options: &AuditOptions) -> PsdkeepResult<AuditReport> {
        let sink = self.walker.sink();
        sink.on_event(WalkEvent::Started {
            root: self.walker.root().to_path_buf(),
            mode: WalkMode::Audit,
            dry_run: false,
        });

        let mut report = AuditReport::new();
        let progress = self.walker.walk(|path, state| {
            let Some(kind) = verdict(state) else {
                return ControlFlow::Continue(());
            };

            let violation = Violation::new(self.walker.relative(path), kind);
            sink.on_event(WalkEvent::ViolationFound {
                violation: violation.clone(),
            });
            report.add(violation);

            if options.fail_fast {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;

        report.files_checked = progress.files_checked;
        report.stopped_early = progress.stopped_early;
        report.interrupted = progress.interrupted;
        if progress.interrupted {
            sink.on_event(WalkEvent::Interrupted);
        }
        sink.on_event(WalkEvent::Completed {
            mode: WalkMode::Audit,
            summary: report.summary(),
        });

        Ok(report)
    }
}
