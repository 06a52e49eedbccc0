//! Integration tests for the raw command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_path, syntaxview};

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn raw_strips_spans_and_decodes_entities() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("raw")
        .arg(fixture_path("highlighted.html"))
        .assert()
        .success()
        .stdout("public class A { List<String> xs; boolean b = x && y; }\n");
}

#[test]
fn raw_reads_stdin() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("raw")
        .write_stdin("  <span class=\"sv-keyword\">return</span> a &lt; b;\n")
        .assert()
        .success()
        .stdout("return a < b;\n");
}

#[test]
fn raw_of_empty_input_is_empty() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("raw")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}

// ============================================================================
// Passthrough Tests
// ============================================================================

#[test]
fn raw_keeps_other_tags() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("raw")
        .write_stdin("<b>bold</b>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<b>bold</b>"));
}
