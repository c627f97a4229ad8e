//! Reconcile Use Case
//!
//! Applies the decision table to every file in the tree, one pass.

use std::ops::ControlFlow;
use std::path::Path;

use crate::application::generator::ArtifactGenerator;
use crate::application::walker::TreeWalker;
use crate::domain::policies::decide;
use crate::domain::ports::{Archiver, PreviewRenderer, WalkEvent};
use crate::domain::value_objects::{ActionOutcome, WalkMode};
use crate::error::{PsdkeepError, PsdkeepResult};

use super::options::ReconcileOptions;
use super::result::ReconcileResult;

/// Reconcile use case - repairs the tree in place
///
/// A single run performs one pass. Some files need more than one pass to
/// reach the compliant state; running again converges.
pub struct Reconciler<'a, A, R>
where
    A: Archiver,
    R: PreviewRenderer,
{
    walker: TreeWalker<'a>,
    generator: ArtifactGenerator<A, R>,
}

impl<'a, A, R> Reconciler<'a, A, R>
where
    A: Archiver,
    R: PreviewRenderer,
{
    pub fn new(walker: TreeWalker<'a>, generator: ArtifactGenerator<A, R>) -> Self {
        Self { walker, generator }
    }

    /// Walk the tree and apply (or plan, in a dry run) each file's action.
    ///
    /// Tool failures and timeouts are scoped to the file being processed;
    /// I/O errors while reading the tree abort the walk.
    pub fn run(&self, options: &ReconcileOptions) -> PsdkeepResult<ReconcileResult> {
        let sink = self.walker.sink();
        sink.on_event(WalkEvent::Started {
            root: self.walker.root().to_path_buf(),
            mode: WalkMode::Reconcile,
            dry_run: options.dry_run,
        });

        let mut result = ReconcileResult::new();
        let progress = self.walker.walk(|path, state| {
            let action = decide(state);
            if action.is_noop() {
                return ControlFlow::Continue(());
            }

            let rel = self.walker.relative(path);
            if options.dry_run {
                sink.on_event(WalkEvent::ActionPlanned {
                    path: rel.clone(),
                    action,
                });
                result.add_planned(rel, action);
                return ControlFlow::Continue(());
            }

            sink.on_event(WalkEvent::ActionStarted {
                path: rel.clone(),
                action,
            });
            match self.generator.apply(action, path) {
                Ok(outcome) => {
                    let outcome = self.relative_outcome(outcome);
                    sink.on_event(WalkEvent::ActionCompleted {
                        path: rel.clone(),
                        action,
                        outcome: outcome.clone(),
                    });
                    result.add_applied(rel, action, outcome);
                }
                Err(err @ PsdkeepError::RetryExhausted { .. }) => {
                    let reason = self.describe(&err);
                    sink.on_event(WalkEvent::ActionDeferred {
                        path: rel.clone(),
                        action,
                        reason: reason.clone(),
                    });
                    result.add_deferred(rel, action, reason);
                }
                Err(err) => {
                    let error = self.describe(&err);
                    sink.on_event(WalkEvent::ActionFailed {
                        path: rel.clone(),
                        action,
                        error: error.clone(),
                    });
                    result.add_failed(rel, action, error);
                }
            }
            ControlFlow::Continue(())
        })?;

        result.files_checked = progress.files_checked;
        result.interrupted = progress.interrupted;
        if progress.interrupted {
            sink.on_event(WalkEvent::Interrupted);
        }
        sink.on_event(WalkEvent::Completed {
            mode: WalkMode::Reconcile,
            summary: result.summary(),
        });

        Ok(result)
    }

    fn relative_outcome(&self, outcome: ActionOutcome) -> ActionOutcome {
        ActionOutcome {
            created: outcome
                .created
                .iter()
                .map(|p| self.walker.relative(p))
                .collect(),
            removed: outcome
                .removed
                .iter()
                .map(|p| self.walker.relative(p))
                .collect(),
        }
    }

    /// Error text with root-relative paths.
    fn describe(&self, err: &PsdkeepError) -> String {
        match err {
            PsdkeepError::RetryExhausted { path, attempts } => format!(
                "{} did not appear after {} attempts",
                self.walker.relative(path).display(),
                attempts
            ),
            PsdkeepError::ToolFailed { tool, message, .. } => format!("{}: {}", tool, message),
            other => other.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.walker.root()
    }
}
