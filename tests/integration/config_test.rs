//! Integration tests for the config subcommands

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::syntaxview;

// ============================================================================
// Config Path Tests
// ============================================================================

#[test]
fn config_path_honours_environment() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_defaults_without_file() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile = \"idea\""))
        .stdout(predicate::str::contains("enabled = true"));
}

// ============================================================================
// Config Init Tests
// ============================================================================

#[test]
fn config_init_writes_file_once() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    syntaxview(dir.path())
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[highlight]\nprofile = 3\n").unwrap();

    syntaxview(dir.path())
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config.toml"));
}
