//! Integration tests for argument handling, help output and logging

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{run, syntaxview};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["raw", "highlight", "request", "copy", "settings", "stylesheet", "config"] {
        assert!(stdout.contains(command), "help should list '{}'", command);
    }
}

#[test]
fn version_flag_prints_version() {
    let (stdout, _stderr, exit_code) = run(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn no_arguments_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

#[test]
fn unknown_profile_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run(&["highlight", "--profile", "vim", "x.java"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("vim"));
}

#[test]
fn missing_file_exits_1_with_helpful_error() {
    let (_stdout, stderr, exit_code) = run(&["raw", "nonexistent.html"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"));
    assert!(stderr.contains("nonexistent.html"));
}

// ============================================================================
// Shell Completion Tests
// ============================================================================

#[test]
fn completions_generate_a_script() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("syntaxview"));
}

// ============================================================================
// Logging Tests
// ============================================================================

#[test]
fn quiet_by_default() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("highlight")
        .write_stdin("int x;")
        .assert()
        .success()
        .stderr(predicate::str::contains("highlighting").not());
}

#[test]
fn verbose_flag_logs_debug_events_to_stderr() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .args(["-v", "highlight"])
        .write_stdin("int x;")
        .assert()
        .success()
        .stdout(predicate::str::contains("highlighting").not())
        .stderr(predicate::str::contains("highlighting"));
}

#[test]
fn log_environment_variable_sets_the_filter() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .env("SYNTAXVIEW_LOG", "debug")
        .arg("highlight")
        .write_stdin("int x;")
        .assert()
        .success()
        .stderr(predicate::str::contains("highlighting"));
}
