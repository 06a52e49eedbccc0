//! Copy handler

use anyhow::Result;
use std::path::Path;

use syntaxview::clipboard::{ClipboardError, ClipboardSink, Copy};
use syntaxview::{prepare_raw_source, Config, PrepareOutcome};

/// Put highlighted markup on the clipboard and print its raw text.
///
/// The raw text is printed even when the clipboard copy fails; the failure
/// is still reported through the exit code.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let markup = super::read_input(file)?;

    let copy = Copy::new();
    let clipboard: Option<&dyn ClipboardSink> = if config.clipboard.enabled {
        Some(&copy)
    } else {
        None
    };

    let mut raw = String::new();
    let outcome = prepare_raw_source(Some(&markup), Some(&mut raw), clipboard);
    println!("{}", raw);

    match outcome? {
        PrepareOutcome::Prepared { copied: Some(result) } => eprintln!("{}", result.message()),
        PrepareOutcome::Prepared { copied: None } => {
            return Err(ClipboardError::Disabled.into());
        }
        PrepareOutcome::Skipped => {}
    }
    Ok(())
}
