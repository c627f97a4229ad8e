//! Common test utilities for psdkeep CLI tests.
//!
//! `TestEnv` holds an isolated asset tree plus a scratch directory for the
//! user config and tool stand-ins, and runs the built binary against them.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a psdkeep CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parsed NDJSON lines from stdout (`--json` runs)
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, l))
            })
            .collect()
    }

    pub fn events_named(&self, name: &str) -> Vec<serde_json::Value> {
        self.events()
            .into_iter()
            .filter(|e| e["event"] == name)
            .collect()
    }
}

pub struct TestEnv {
    /// The tree being reconciled or audited
    pub tree: TempDir,
    /// XDG config home and tool scripts
    pub scratch: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tree: TempDir::new().expect("tree dir"),
            scratch: TempDir::new().expect("scratch dir"),
            env: Vec::new(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.tree.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn with_env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.env.push((
            key.to_string(),
            value.as_ref().to_string_lossy().into_owned(),
        ));
        self
    }

    /// Run psdkeep with the tree as working directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_psdkeep"));
        cmd.current_dir(self.tree.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.scratch.path().join("config"))
            .env("HOME", self.scratch.path())
            .env("LC_ALL", "C")
            .env("NO_COLOR", "1")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("PSDKEEP_ARCHIVER")
            .env_remove("PSDKEEP_PREVIEW_PROGRAM")
            .env_remove("PSDKEEP_WAIT_ATTEMPTS")
            .env_remove("PSDKEEP_WAIT_INTERVAL_MS");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute psdkeep");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Shell-script stand-ins for 7za and ImageMagick.
#[cfg(unix)]
pub mod tools {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// `a <switches x4> <archive> <entry>` copies the entry;
    /// `e <archive> -o<dir> ...` restores `<stem>.psd` into the directory.
    pub const FAKE_7ZA: &str = r#"#!/bin/sh
cmd="$1"; shift
case "$cmd" in
  a)
    shift 4
    cp "$2" "$1"
    ;;
  e)
    archive="$1"
    out="${2#-o}"
    base=$(basename "$archive")
    cp "$archive" "$out/${base%.*}.psd"
    ;;
  *)
    echo "unsupported command: $cmd" >&2
    exit 2
    ;;
esac
"#;

    /// Writes a tiny PNG signature to the last argument.
    pub const FAKE_MAGICK: &str = r#"#!/bin/sh
for last in "$@"; do :; done
printf '\211PNG' > "$last"
"#;

    pub const FAILING_TOOL: &str = r#"#!/bin/sh
echo "ERROR: cannot open file as archive" >&2
exit 2
"#;

    pub fn install(dir: &Path, name: &str, script: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, script).expect("write tool script");
        let mut perms = std::fs::metadata(&path).expect("stat tool").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("chmod tool");
        path
    }
}

#[cfg(unix)]
impl TestEnv {
    /// Environment wired to working stand-in tools with a fast wait.
    pub fn with_fake_tools() -> Self {
        let env = Self::new();
        let archiver = tools::install(env.scratch.path(), "fake-7za", tools::FAKE_7ZA);
        let renderer = tools::install(env.scratch.path(), "fake-magick", tools::FAKE_MAGICK);
        env.with_env("PSDKEEP_ARCHIVER", archiver)
            .with_env("PSDKEEP_PREVIEW_PROGRAM", renderer)
            .with_env("PSDKEEP_WAIT_ATTEMPTS", "1")
            .with_env("PSDKEEP_WAIT_INTERVAL_MS", "10")
    }
}
