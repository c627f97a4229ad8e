//! Console Event Sink
//!
//! Human-readable progress lines. The default level shows actions,
//! deferrals, failures and violations; `-v` adds directories, skipped
//! entries and action starts; `-vv` adds every classified file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use psdkeep::domain::ports::{WalkEvent, WalkEventSink};
use psdkeep::domain::value_objects::{ActionOutcome, FileKind};

use crate::ui::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    ui: UiContext,
    annotate: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self {
            ui,
            annotate: is_github_actions(),
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    #[cfg(test)]
    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            annotate: false,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn dim(&self, text: impl Into<String>) -> String {
        ColoredText::dim(text).render(self.ui.color)
    }

    /// Append a workflow annotation when running under GitHub Actions.
    fn annotated(
        &self,
        mut line: String,
        level: AnnotationLevel,
        message: &str,
        path: &Path,
    ) -> String {
        if self.annotate {
            line.push('\n');
            line.push_str(&github_actions_annotation(
                level,
                message,
                Some(&path.display().to_string()),
                Some("psdkeep"),
            ));
        }
        line
    }

    /// Text for one event, or `None` when hidden at the current verbosity.
    pub fn render(&self, event: &WalkEvent) -> Option<String> {
        let verbose = self.ui.verbose;
        let line = match event {
            WalkEvent::Started { .. } | WalkEvent::Completed { .. } => return None,

            WalkEvent::DirectoryEntered { path } if verbose >= 1 => {
                self.dim(format!("  {}/", path.display()))
            }

            WalkEvent::FileClassified { path, state } if verbose >= 2 => {
                let detail = match state.kind {
                    FileKind::Asset => format!(
                        "psd, preview: {}, archive: {}",
                        yes_no(state.has_preview),
                        yes_no(state.has_archive)
                    ),
                    FileKind::Archive => format!(
                        "archive, preview: {}, psd: {}",
                        yes_no(state.has_preview),
                        yes_no(state.has_asset)
                    ),
                    FileKind::Other => "other".to_string(),
                };
                self.dim(format!("  {} ({})", path.display(), detail))
            }

            WalkEvent::ActionPlanned { path, action } => format!(
                "  {} {}: would {}",
                self.icon(Icon::Arrow),
                path.display(),
                action
            ),

            WalkEvent::ActionStarted { path, action } if verbose >= 1 => format!(
                "  {} {}: {}",
                self.icon(Icon::Progress),
                path.display(),
                action
            ),

            WalkEvent::ActionCompleted {
                path,
                action,
                outcome,
            } => {
                let mut line = format!(
                    "  {} {}: {}",
                    self.icon(Icon::Success),
                    path.display(),
                    action
                );
                let changes = describe_outcome(outcome);
                if !changes.is_empty() {
                    line.push_str(&self.dim(format!(" ({})", changes)));
                }
                line
            }

            WalkEvent::ActionDeferred {
                path,
                action,
                reason,
            } => {
                let line = format!(
                    "  {} {}: {} deferred, {}",
                    self.icon(Icon::Warning),
                    path.display(),
                    action,
                    ColoredText::warning(reason.as_str()).render(self.ui.color)
                );
                self.annotated(line, AnnotationLevel::Warning, reason, path)
            }

            WalkEvent::ActionFailed {
                path,
                action,
                error,
            } => {
                let line = format!(
                    "  {} {}: {} failed: {}",
                    self.icon(Icon::Error),
                    path.display(),
                    action,
                    ColoredText::error(error.as_str()).render(self.ui.color)
                );
                self.annotated(line, AnnotationLevel::Error, error, path)
            }

            WalkEvent::ViolationFound { violation } => {
                let line = format!(
                    "  {} {}\n      {} {}",
                    self.icon(Icon::Error),
                    violation,
                    self.icon(Icon::Arrow),
                    self.dim(violation.kind.hint())
                );
                self.annotated(
                    line,
                    AnnotationLevel::Error,
                    violation.kind.message(),
                    &violation.path,
                )
            }

            WalkEvent::EntrySkipped { path, reason } if verbose >= 1 => format!(
                "  {} {} skipped ({})",
                self.icon(Icon::Pending),
                path.display(),
                reason
            ),

            WalkEvent::Interrupted => format!(
                "  {} Interrupted, stopped before the next file",
                self.icon(Icon::Warning)
            ),

            _ => return None,
        };
        Some(line)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn join(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_outcome(outcome: &ActionOutcome) -> String {
    let mut parts = Vec::new();
    if !outcome.created.is_empty() {
        parts.push(format!("created {}", join(&outcome.created)));
    }
    if !outcome.removed.is_empty() {
        parts.push(format!("removed {}", join(&outcome.removed)));
    }
    parts.join("; ")
}

impl WalkEventSink for ConsoleEventSink {
    fn on_event(&self, event: WalkEvent) {
        let Some(line) = self.render(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose >= 1
    }
}
