//! End-to-end tests driving real subprocesses through fake linter scripts.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use lintbridge::{lint_source, LintBridgeError, LintConfig, Linter};

/// Write an executable shell script that stands in for a linter.
fn fake_linter(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}

fn config_with(linter: Linter, executable: PathBuf) -> LintConfig {
    let mut config = LintConfig {
        linter,
        ..Default::default()
    };
    config.executable_overrides.insert(linter, executable);
    config
}

#[test]
fn gjslint_pass_produces_line_annotations() {
    let dir = tempfile::tempdir().unwrap();
    let exe = fake_linter(
        dir.path(),
        "gjslint",
        r#"echo 'Line 12, E:0110: Missing semicolon'
echo 'Line 30, E:0002: Missing space before "{"'
echo 'Found 2 errors, including 0 new errors, in 1 files (0 files OK).'"#,
    );
    let config = config_with(Linter::Gjslint, exe);

    let annotations = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap();

    assert_eq!(annotations.error_count(), 2);
    assert_eq!(annotations.error_messages[&12], vec!["Missing semicolon"]);
    assert!(annotations.error_underlines.is_empty());
}

#[test]
fn gjslint_pass_honors_ignore_codes() {
    let dir = tempfile::tempdir().unwrap();
    let exe = fake_linter(
        dir.path(),
        "gjslint",
        r#"echo 'Line 12, E:0110: Missing semicolon'
echo 'Line 30, E:0002: Missing space'"#,
    );
    let mut config = config_with(Linter::Gjslint, exe);
    config.gjslint_ignore = [110].into_iter().collect();

    let annotations = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap();

    assert_eq!(annotations.error_count(), 1);
    assert!(!annotations.error_messages.contains_key(&12));
    assert!(annotations.error_messages.contains_key(&30));
}

#[test]
fn jshint_pass_converts_columns_and_underlines() {
    let dir = tempfile::tempdir().unwrap();
    let exe = fake_linter(
        dir.path(),
        "jshint",
        r#"echo '[{"line": 5, "character": 10, "reason": "Missing semicolon."}]'"#,
    );
    let config = config_with(Linter::Jshint, exe);

    let annotations = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap();

    assert_eq!(annotations.error_messages[&5], vec!["Missing semicolon."]);
    assert_eq!(annotations.error_underlines[&5], vec![(9, 10)]);
}

#[test]
fn composite_pass_merges_both_output_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let exe = fake_linter(
        dir.path(),
        "lintall",
        r#"echo 'Line 12, E:0110: Missing semicolon'
echo "lib/app.js: line 4, col 7, 'foo' is not defined.""#,
    );
    let config = config_with(Linter::Composite, exe);

    let annotations = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap();

    assert_eq!(annotations.error_count(), 2);
    assert_eq!(annotations.error_underlines[&4], vec![(7, 8)]);
    assert!(annotations.warning_messages.is_empty());
    assert!(annotations.violation_messages.is_empty());
}

#[test]
fn nonzero_exit_status_does_not_gate_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let exe = fake_linter(
        dir.path(),
        "gjslint",
        r#"echo 'Line 3, E:0001: Extra space'
exit 2"#,
    );
    let config = config_with(Linter::Gjslint, exe);

    let annotations = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap();
    assert_eq!(annotations.error_count(), 1);
}

#[test]
fn malformed_json_fails_with_payload_attached() {
    let dir = tempfile::tempdir().unwrap();
    let exe = fake_linter(dir.path(), "jshint", r#"echo '{not json'"#);
    let config = config_with(Linter::Jshint, exe);

    let err = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap_err();
    match err {
        LintBridgeError::MalformedOutput { raw, .. } => assert!(raw.contains("{not json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_executable_skips_pass_with_identity() {
    let config = config_with(Linter::Jslint, PathBuf::from("/nonexistent/jslint"));

    let err = lint_source("var x = 1\n", Path::new("app.js"), &config).unwrap_err();
    match err {
        LintBridgeError::ExecutableNotFound { linter } => assert_eq!(linter, Linter::Jslint),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn slow_linter_is_killed_at_the_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let exe = fake_linter(dir.path(), "gjslint", "sleep 5");
    let mut config = config_with(Linter::Gjslint, exe);
    config.timeout = Duration::from_millis(200);

    let start = Instant::now();
    let err = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap_err();

    assert!(matches!(err, LintBridgeError::Timeout { .. }));
    // The subprocess was killed, not waited out
    assert!(start.elapsed() < Duration::from_secs(4));
}

#[test]
fn runaway_output_is_capped() {
    let dir = tempfile::tempdir().unwrap();
    let exe = fake_linter(
        dir.path(),
        "gjslint",
        "head -c 262144 /dev/zero | tr '\\0' 'a'",
    );
    let mut config = config_with(Linter::Gjslint, exe);
    config.max_output_bytes = 64 * 1024;

    let err = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap_err();
    match err {
        LintBridgeError::OutputTooLarge { limit, .. } => assert_eq!(limit, 64 * 1024),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn jshint_pass_picks_up_project_rc_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".jshintrc"),
        "{\n  // enforce strict equality\n  \"eqeqeq\": true\n}",
    )
    .unwrap();

    // The fake linter echoes its own argv so the test can inspect the
    // inline config it was handed.
    let exe = fake_linter(
        dir.path(),
        "jshint",
        r#"printf '%s\n' "$@" > "$(dirname "$0")/argv.txt"
echo '[]'"#,
    );
    let config = config_with(Linter::Jshint, exe);

    let annotations = lint_source("var x = 1\n", &dir.path().join("app.js"), &config).unwrap();
    assert!(annotations.is_empty());

    let argv = fs::read_to_string(dir.path().join("argv.txt")).unwrap();
    assert!(argv.contains("--config-json"));
    assert!(argv.contains(r#"{"eqeqeq":true}"#));
}
