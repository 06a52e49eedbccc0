//! Shared helpers for the integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Content of a fixture file.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// A syntaxview command isolated from the user's config file.
///
/// The config path points into `config_dir`, which starts out empty.
pub fn syntaxview(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_syntaxview"));
    cmd.env("SYNTAXVIEW_CONFIG", config_dir.join("config.toml"))
        .env_remove("SYNTAXVIEW_LOG");
    cmd
}

/// Run syntaxview with `args` and capture stdout, stderr and exit code.
pub fn run(args: &[&str]) -> (String, String, i32) {
    let dir = TempDir::new().unwrap();
    let output = syntaxview(dir.path()).args(args).output().unwrap();

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}
