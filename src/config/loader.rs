//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::CONFIG_FILE_NAME;
use crate::error::{PsdkeepError, PsdkeepResult};

use super::env_validator::EnvVarValidator;
use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key in a config file that no setting reads
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// `PSDKEEP_*` value that does not parse; the configured value is kept
    InvalidEnvValue {
        var: String,
        value: String,
        expected: String,
    },
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PsdkeepResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PsdkeepError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files consulted for `root`, highest priority first.
pub fn candidates(root: &Path) -> Vec<PathBuf> {
    let mut paths = vec![root.join(CONFIG_FILE_NAME)];
    if let Some(dir) = user_config_dir() {
        paths.push(dir.join("psdkeep/config.toml"));
    }
    paths
}

/// Load the first existing candidate (or defaults), then apply env overrides.
///
/// A file that exists but fails to parse is an error rather than a silent
/// fallback to the next candidate.
pub fn load_for_root(root: &Path) -> PsdkeepResult<(Config, Vec<ConfigWarning>)> {
    for candidate in candidates(root) {
        if candidate.is_file() {
            let (config, mut warnings) = load_with_warnings(&candidate)?;
            let (config, env_warnings) = with_env_overrides(config);
            warnings.extend(env_warnings);
            return Ok((config, warnings));
        }
    }
    Ok(with_env_overrides(Config::default()))
}

/// Apply environment variable overrides (PSDKEEP_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Override logic, with the variable source injected.
pub(super) fn apply_overrides(
    mut config: Config,
    var: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    // PSDKEEP_ARCHIVER
    if let Some(program) = var("PSDKEEP_ARCHIVER").filter(|v| !v.trim().is_empty()) {
        config.archiver.program = program;
    }

    // PSDKEEP_PREVIEW_PROGRAM
    if let Some(program) = var("PSDKEEP_PREVIEW_PROGRAM").filter(|v| !v.trim().is_empty()) {
        config.preview.program = program;
    }

    // PSDKEEP_WAIT_ATTEMPTS
    if let Some(raw) = var("PSDKEEP_WAIT_ATTEMPTS") {
        match EnvVarValidator::new("PSDKEEP_WAIT_ATTEMPTS", "a whole number").parse(&raw) {
            Ok(attempts) => config.wait.attempts = attempts,
            Err(warning) => warnings.push(warning),
        }
    }

    // PSDKEEP_WAIT_INTERVAL_MS
    if let Some(raw) = var("PSDKEEP_WAIT_INTERVAL_MS") {
        match EnvVarValidator::new("PSDKEEP_WAIT_INTERVAL_MS", "milliseconds as a whole number")
            .parse(&raw)
        {
            Ok(ms) => config.wait.interval_ms = ms,
            Err(warning) => warnings.push(warning),
        }
    }

    (config, warnings)
}

/// User config directory; `XDG_CONFIG_HOME` wins on every platform.
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "ignore",
        "names",
        "additional",
        "archiver",
        "program",
        "extension",
        "format",
        "preview",
        "args",
        "wait",
        "attempts",
        "interval_ms",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
