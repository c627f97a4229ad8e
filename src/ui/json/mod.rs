//! JSON output helpers for events the binary emits itself
//! (errors and config warnings). Walk events go through `JsonEventSink`.

use std::io::{self, Write};

use psdkeep::config::ConfigWarning;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes a raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn config_warning_event(warning: &ConfigWarning) -> serde_json::Value {
    match warning {
        ConfigWarning::UnknownKey {
            key,
            file,
            line,
            suggestion,
        } => serde_json::json!({
            "event": "config_warning",
            "kind": "unknown_key",
            "key": key,
            "file": file.display().to_string(),
            "line": line,
            "suggestion": suggestion,
        }),
        ConfigWarning::InvalidEnvValue {
            var,
            value,
            expected,
        } => serde_json::json!({
            "event": "config_warning",
            "kind": "invalid_env_value",
            "var": var,
            "value": value,
            "expected": expected,
        }),
    }
}
