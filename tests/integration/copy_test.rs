//! Integration tests for the copy command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_path, run, syntaxview};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn copy_help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run(&["copy", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("clipboard"));
    assert!(stdout.contains("[FILE]"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn copy_nonexistent_file_exits_1() {
    let (_stdout, stderr, exit_code) = run(&["copy", "/some/path/to/missing.html"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"));
}

#[test]
fn copy_with_disabled_clipboard_still_prints_raw_text() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[clipboard]\nenabled = false\n").unwrap();

    syntaxview(dir.path())
        .arg("copy")
        .write_stdin("<span>a &lt; b</span>")
        .assert()
        .code(1)
        .stdout("a < b\n")
        .stderr(predicate::str::contains("disabled"));
}

// ============================================================================
// Platform-Specific Tests
// ============================================================================

#[test]
#[cfg(target_os = "linux")]
fn copy_succeeds_or_fails_gracefully_on_linux() {
    let dir = TempDir::new().unwrap();

    let output = syntaxview(dir.path())
        .arg("copy")
        .arg(fixture_path("highlighted.html"))
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // The raw text is printed whether or not a clipboard tool is available
    assert!(stdout.contains("public class A"), "got stdout: {}", stdout);
    if output.status.success() {
        assert!(stderr.contains("clipboard"), "got stderr: {}", stderr);
    } else {
        assert!(
            stderr.contains("xclip")
                || stderr.contains("xsel")
                || stderr.contains("wl-copy")
                || stderr.contains("clipboard"),
            "Expected helpful error about clipboard tools, got: {}",
            stderr
        );
    }
}
