//! Command-line preview renderer
//!
//! Runs a configurable program (ImageMagick by default) with `{input}` and
//! `{output}` placeholders substituted into its arguments.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::domain::ports::PreviewRenderer;
use crate::error::PsdkeepResult;
use crate::infrastructure::process::run_tool;

pub const DEFAULT_PROGRAM: &str = "magick";

/// `[0]` selects the flattened composite layer of a PSD.
pub const DEFAULT_ARGS: &[&str] = &["{input}[0]", "{output}"];

const INPUT: &str = "{input}";
const OUTPUT: &str = "{output}";

#[derive(Debug, Clone)]
pub struct CommandPreviewRenderer {
    program: OsString,
    args: Vec<String>,
}

impl Default for CommandPreviewRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_ARGS.iter().map(|s| s.to_string()))
    }
}

impl CommandPreviewRenderer {
    pub fn new<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn render_args(&self, source: &Path, preview: &Path) -> Vec<OsString> {
        self.args
            .iter()
            .map(|template| expand(template, source, preview))
            .collect()
    }
}

/// Substitute placeholders without forcing paths through UTF-8.
fn expand(template: &str, input: &Path, output: &Path) -> OsString {
    let mut expanded = OsString::new();
    let mut rest = template;
    loop {
        let next = [(INPUT, input), (OUTPUT, output)]
            .into_iter()
            .filter_map(|(token, path)| rest.find(token).map(|at| (at, token, path)))
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, token, path)) => {
                expanded.push(&rest[..at]);
                expanded.push(path.as_os_str());
                rest = &rest[at + token.len()..];
            }
            None => {
                expanded.push(rest);
                return expanded;
            }
        }
    }
}

impl PreviewRenderer for CommandPreviewRenderer {
    fn name(&self) -> &str {
        "preview renderer"
    }

    fn render(&self, source: &Path, preview: &Path) -> PsdkeepResult<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.render_args(source, preview));
        run_tool(self.name(), source, &mut cmd)
    }
}
