//! Raw text recovery handler

use anyhow::Result;
use std::path::Path;

use syntaxview::to_raw_text;

/// Print the raw source text of highlighted markup.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>) -> Result<()> {
    let markup = super::read_input(file)?;
    println!("{}", to_raw_text(&markup));
    Ok(())
}
