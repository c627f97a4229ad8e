//! `psdkeep audit` against real trees (no external tools involved)

mod common;

use common::TestEnv;

fn violating_env() -> TestEnv {
    let env = TestEnv::new();
    env.write("art/missing.psd", "x");
    env.write("art/unarchived.psd", "x");
    env.write("art/unarchived.png", "x");
    env.write("art/orphan.7z", "x");
    env.write("README.md", "docs");
    env
}

#[test]
fn compliant_tree_passes() {
    let env = TestEnv::new();
    env.write("art/logo.7z", "x");
    env.write("art/logo.png", "x");
    env.write("notes.txt", "x");

    let result = env.run(&["audit"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Audit Passed"), "{}", result.stdout);
}

#[test]
fn violations_fail_with_messages() {
    let env = violating_env();

    let result = env.run(&["audit"]);

    assert_eq!(result.exit_code, 1);
    assert!(result
        .stdout
        .contains("PSD file does not have a preview png associated with it: \"art/missing.psd\""));
    assert!(result
        .stdout
        .contains("PSD file is not archived: \"art/unarchived.psd\""));
    assert!(result
        .stdout
        .contains("Archive does not have a preview png associated with it: \"art/orphan.7z\""));
    assert!(result.stdout.contains("Audit Failed"));
}

#[test]
fn audit_does_not_touch_the_tree() {
    let env = violating_env();

    env.run(&["audit"]);

    assert!(env.exists("art/missing.psd"));
    assert!(!env.exists("art/missing.png"));
    assert!(!env.exists("art/unarchived.7z"));
}

#[test]
fn test_alias_behaves_like_audit() {
    let env = violating_env();

    let result = env.run(&["test"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("art/orphan.7z"));
}

#[test]
fn json_output_streams_violations() {
    let env = violating_env();

    let result = env.run(&["audit", "--json"]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.events_named("violation").len(), 3);

    let complete = result.events_named("complete");
    assert_eq!(complete.len(), 1);
    assert_eq!(complete[0]["command"], "audit");
    assert_eq!(complete[0]["status"], "failure");
    assert_eq!(complete[0]["violations"], 3);
}

#[test]
fn fail_fast_stops_at_first_violation() {
    let env = violating_env();

    let result = env.run(&["audit", "--json", "--fail-fast"]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.events_named("violation").len(), 1);
}

#[test]
fn explicit_root_is_reported_relative() {
    let env = violating_env();

    let result = env.run(&["audit", "art", "--json"]);

    let paths: Vec<String> = result
        .events_named("violation")
        .iter()
        .map(|e| e["path"].as_str().unwrap().to_string())
        .collect();
    assert!(paths.contains(&"missing.psd".to_string()), "{:?}", paths);
}

#[test]
fn ignored_directories_are_skipped() {
    let env = TestEnv::new();
    env.write("node_modules/pkg/icon.psd", "x");
    env.write(".git/objects/a.psd", "x");

    let result = env.run(&["audit"]);

    assert!(result.success, "stdout: {}", result.stdout);
}

#[test]
fn config_can_extend_the_ignore_list() {
    let env = TestEnv::new();
    env.write("exports/banner.psd", "x");
    env.write(".psdkeep.toml", "[ignore]\nadditional = [\"exports\"]\n");

    let result = env.run(&["audit"]);

    assert!(result.success, "stdout: {}", result.stdout);
}

#[test]
fn unknown_config_keys_warn_but_continue() {
    let env = TestEnv::new();
    env.write(".psdkeep.toml", "[wait]\natempts = 2\n");

    let result = env.run(&["audit"]);

    assert!(result.success);
    assert!(result.stderr.contains("Unknown config key 'atempts'"), "{}", result.stderr);
}

#[test]
fn invalid_config_is_an_error() {
    let env = TestEnv::new();
    env.write(".psdkeep.toml", "[wait\n");

    let result = env.run(&["audit"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid config"), "{}", result.stderr);
}

#[test]
fn missing_root_is_an_error() {
    let env = TestEnv::new();

    let result = env.run(&["audit", "does-not-exist"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("directory not found"), "{}", result.stderr);
}

#[test]
fn missing_root_json_error_event() {
    let env = TestEnv::new();

    let result = env.run(&["audit", "does-not-exist", "--json"]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.events_named("error").len(), 1);
}

#[test]
fn invalid_wait_env_value_is_reported() {
    let env = TestEnv::new().with_env("PSDKEEP_WAIT_ATTEMPTS", "lots");
    env.write("logo.7z", "x");
    env.write("logo.png", "x");

    let result = env.run(&["audit"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(
        result
            .stderr
            .contains("Invalid PSDKEEP_WAIT_ATTEMPTS value 'lots'"),
        "{}",
        result.stderr
    );
}
