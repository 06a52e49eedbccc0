//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod copy;
pub mod highlight;
pub mod raw;
pub mod settings;

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole input from `file`, or from stdin when no file is given.
///
/// Refuses to wait on an interactive terminal.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("File not found or unreadable: {}", path.display()));
    }

    if atty::is(atty::Stream::Stdin) {
        bail!("No input: pass a FILE or pipe data on stdin");
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
