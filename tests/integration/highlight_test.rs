//! Integration tests for the highlight, request, settings and stylesheet commands

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_path, load_fixture, syntaxview};

// ============================================================================
// Highlight Command Tests
// ============================================================================

#[test]
fn highlight_uses_idea_inline_by_default() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("highlight")
        .arg(fixture_path("Sample.java"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<span style="color:#000080;font-weight:bold;">public</span>"#,
        ))
        .stdout(predicate::str::contains("&amp;&amp;"))
        .stdout(predicate::str::contains(
            r#"<span style="color:#808080;font-style:italic;">// entry point</span>"#,
        ));
}

#[test]
fn highlight_flags_select_profile_and_markup() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .args(["highlight", "--profile", "netbeans", "--markup", "class-based"])
        .arg(fixture_path("Sample.java"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<span class="sv-keyword">class</span>"#))
        .stdout(predicate::str::contains("style=").not());
}

#[test]
fn highlight_xml() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .args(["highlight", "--language", "xml", "--profile", "eclipse"])
        .arg(fixture_path("pom.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<span style="color:#3f5fbf;">&lt;!-- build --&gt;</span>"#,
        ));
}

#[test]
fn highlight_then_raw_recovers_source() {
    let dir = TempDir::new().unwrap();
    let source = load_fixture("Sample.java");

    let output = syntaxview(dir.path())
        .args(["highlight", "--profile", "eclipse"])
        .write_stdin(source.clone())
        .output()
        .unwrap();
    assert!(output.status.success());

    syntaxview(dir.path())
        .arg("raw")
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout(format!("{}\n", source.trim()));
}

#[test]
fn highlight_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[highlight]\nmarkup = \"class-based\"\n",
    )
    .unwrap();

    syntaxview(dir.path())
        .arg("highlight")
        .write_stdin("int x;")
        .assert()
        .success()
        .stdout("<span class=\"sv-keyword\">int</span> x;\n");
}

// ============================================================================
// Request Command Tests
// ============================================================================

#[test]
fn request_applies_params_and_decodes_source() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("request")
        .arg(fixture_path("request.txt"))
        .assert()
        .success()
        .stdout("<span style=\"color:#7f0058;font-weight:bold;\">int</span> x = 1;\n");
}

#[test]
fn request_without_source_fails() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("request")
        .write_stdin("profile=idea")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("source"));
}

#[test]
fn request_with_bad_escape_fails() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .arg("request")
        .write_stdin("source=%ZZ")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed request"));
}

// ============================================================================
// Settings and Stylesheet Tests
// ============================================================================

#[test]
fn settings_prints_json() {
    let dir = TempDir::new().unwrap();

    let output = syntaxview(dir.path())
        .arg("settings")
        .arg(fixture_path("request.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["current"]["profile"], "eclipse");
    assert_eq!(json["all"]["language"][1], "xml");
    assert_eq!(
        json["widgets"]["profile"]["selector"]["current_icon"],
        "/pic/profile/eclipse.png"
    );
    assert_eq!(json["widgets"]["markup"]["arrow"]["display"], "none");
}

#[test]
fn stylesheet_lists_classes() {
    let dir = TempDir::new().unwrap();

    syntaxview(dir.path())
        .args(["stylesheet", "--profile", "eclipse"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            ".sv-keyword { color:#7f0058;font-weight:bold; }",
        ));
}
