//! `psdkeep fix` end to end

mod common;

use common::TestEnv;

#[test]
fn compliant_tree_needs_no_tools() {
    let env = TestEnv::new()
        .with_env("PSDKEEP_ARCHIVER", "psdkeep-missing-7za")
        .with_env("PSDKEEP_PREVIEW_PROGRAM", "psdkeep-missing-magick");
    env.write("logo.7z", "x");
    env.write("logo.png", "x");

    let result = env.run(&["fix"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Already Compliant"), "{}", result.stdout);
}

#[test]
fn dry_run_plans_without_touching() {
    let env = TestEnv::new()
        .with_env("PSDKEEP_ARCHIVER", "psdkeep-missing-7za")
        .with_env("PSDKEEP_PREVIEW_PROGRAM", "psdkeep-missing-magick");
    env.write("a.psd", "x");
    env.write("b.psd", "x");
    env.write("b.png", "x");

    let result = env.run(&["fix", "--dry-run", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let planned = result.events_named("item_planned");
    assert_eq!(planned.len(), 2);
    assert!(planned
        .iter()
        .any(|e| e["path"] == "a.psd" && e["action"] == "generate_preview"));
    assert!(planned
        .iter()
        .any(|e| e["path"] == "b.psd" && e["action"] == "compress_and_remove"));
    assert!(env.exists("a.psd"));
    assert!(!env.exists("a.png"));
}

#[cfg(unix)]
mod with_tools {
    use super::common::{tools, TestEnv};

    #[test]
    fn asset_is_archived_and_previewed() {
        let env = TestEnv::with_fake_tools();
        env.write("art/logo.psd", "layers");

        let result = env.run(&["fix"]);

        assert!(result.success, "stdout: {}\nstderr: {}", result.stdout, result.stderr);
        assert!(env.exists("art/logo.7z"));
        assert!(env.exists("art/logo.png"));
        assert!(!env.exists("art/logo.psd"));
        assert!(result.stdout.contains("Fix Complete"), "{}", result.stdout);
    }

    #[test]
    fn archive_gets_preview_and_asset_is_not_left_behind() {
        let env = TestEnv::with_fake_tools();
        env.write("banner.7z", "layers");

        let result = env.run(&["fix", "--json"]);

        assert!(result.success, "stderr: {}", result.stderr);
        assert!(env.exists("banner.7z"));
        assert!(env.exists("banner.png"));
        assert!(!env.exists("banner.psd"));
    }

    #[test]
    fn fix_then_audit_passes() {
        let env = TestEnv::with_fake_tools();
        env.write("a.psd", "x");
        env.write("b.psd", "x");
        env.write("b.png", "x");
        env.write("c.psd", "x");
        env.write("c.png", "x");
        env.write("c.7z", "x");
        env.write("d/e.7z", "x");

        let fix = env.run(&["fix"]);
        assert!(fix.success, "stdout: {}\nstderr: {}", fix.stdout, fix.stderr);

        let audit = env.run(&["audit"]);
        assert!(audit.success, "stdout: {}", audit.stdout);

        let again = env.run(&["fix", "--json"]);
        assert!(again.success);
        assert!(again.events_named("item_done").is_empty());
    }

    #[test]
    fn tool_failure_keeps_original_and_exits_non_zero() {
        let env = TestEnv::with_fake_tools();
        let failing = tools::install(env.scratch.path(), "broken-7za", tools::FAILING_TOOL);
        let env = env.with_env("PSDKEEP_ARCHIVER", failing);
        env.write("a.psd", "x");
        env.write("a.png", "x");
        env.write("ok.txt", "x");

        let result = env.run(&["fix", "--json"]);

        assert_eq!(result.exit_code, 1);
        let errors = result.events_named("item_error");
        assert_eq!(errors.len(), 1);
        assert!(errors[0]["error"]
            .as_str()
            .unwrap()
            .contains("cannot open file as archive"));
        assert!(env.exists("a.psd"));
        assert_eq!(result.events_named("complete")[0]["status"], "failure");
    }

    #[test]
    fn missing_archiver_is_reported() {
        let env = TestEnv::with_fake_tools().with_env("PSDKEEP_ARCHIVER", "psdkeep-missing-7za");
        env.write("a.psd", "x");
        env.write("a.png", "x");

        let result = env.run(&["fix"]);

        assert_eq!(result.exit_code, 1);
        assert!(result.stdout.contains("not found"), "{}", result.stdout);
        assert!(env.exists("a.psd"));
    }
}
