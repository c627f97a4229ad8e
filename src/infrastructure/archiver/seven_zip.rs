//! 7-Zip archiver
//!
//! Drives the `7za` command-line tool (or any compatible `7z` binary).

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::domain::ports::Archiver;
use crate::error::PsdkeepResult;
use crate::infrastructure::process::run_tool;

/// Default executable name
pub const DEFAULT_PROGRAM: &str = "7za";

/// Default archive type passed to `-t`
pub const DEFAULT_FORMAT: &str = "7z";

/// Archiver backed by the 7-Zip command line
#[derive(Debug, Clone)]
pub struct SevenZipArchiver {
    program: OsString,
    format: String,
}

impl Default for SevenZipArchiver {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_FORMAT)
    }
}

impl SevenZipArchiver {
    pub fn new(program: impl Into<OsString>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Arguments for `compress`. The source is passed by file name; the
    /// command runs in the source's directory so the archive holds a bare
    /// entry name.
    pub fn compress_args(&self, source: &Path, archive: &Path) -> Vec<OsString> {
        let entry = source
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| source.as_os_str().to_os_string());
        vec![
            "a".into(),
            format!("-t{}", self.format).into(),
            "-mx=9".into(),
            "-y".into(),
            "-bd".into(),
            archive.as_os_str().to_os_string(),
            entry,
        ]
    }

    /// Arguments for `extract`: flatten into `dest_dir`, overwrite silently.
    pub fn extract_args(&self, archive: &Path, dest_dir: &Path) -> Vec<OsString> {
        let mut out = OsString::from("-o");
        out.push(dest_dir.as_os_str());
        vec![
            "e".into(),
            archive.as_os_str().to_os_string(),
            out,
            "-y".into(),
            "-bd".into(),
        ]
    }
}

impl Archiver for SevenZipArchiver {
    fn name(&self) -> &str {
        "7-Zip"
    }

    fn compress(&self, source: &Path, archive: &Path) -> PsdkeepResult<()> {
        let archive = std::path::absolute(archive)?;
        let mut cmd = Command::new(&self.program);
        cmd.args(self.compress_args(source, &archive));
        if let Some(dir) = source.parent().filter(|p| !p.as_os_str().is_empty()) {
            cmd.current_dir(dir);
        }
        run_tool(self.name(), source, &mut cmd)
    }

    fn extract(&self, archive: &Path, dest_dir: &Path) -> PsdkeepResult<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.extract_args(archive, dest_dir));
        run_tool(self.name(), archive, &mut cmd)
    }
}
