//! Shared process runner for external tools

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{PsdkeepError, PsdkeepResult};

/// Run `cmd` to completion.
///
/// stdout is discarded and stderr captured; a non-zero exit becomes
/// `ToolFailed` carrying the last line the tool wrote to stderr.
pub fn run_tool(tool: &str, subject: &Path, cmd: &mut Command) -> PsdkeepResult<()> {
    let output = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PsdkeepError::ToolNotFound {
                tool: tool.to_string(),
                program: cmd.get_program().to_string_lossy().into_owned(),
            },
            _ => PsdkeepError::Io(e),
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .map(str::to_string)
        .unwrap_or_else(|| output.status.to_string());

    Err(PsdkeepError::ToolFailed {
        tool: tool.to_string(),
        path: subject.to_path_buf(),
        message,
    })
}
