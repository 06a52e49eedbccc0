//! Highlighting handlers

use anyhow::{bail, Context, Result};
use std::path::Path;

use syntaxview::cli::HighlightArgs;
use syntaxview::clipboard::Copy;
use syntaxview::markup::highlight_to_html;
use syntaxview::params::parse_request;
use syntaxview::{Config, Settings};

/// Highlight a source file with config defaults overridden by flags.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &HighlightArgs) -> Result<()> {
    let config = Config::load()?;
    let source = super::read_input(args.file.as_deref())?;

    let defaults = config.settings();
    let settings = Settings::new(
        args.profile.unwrap_or(defaults.profile),
        args.language.unwrap_or(defaults.language),
        args.markup.unwrap_or(defaults.markup),
    );
    tracing::debug!(?settings, "highlighting");

    let html = highlight_to_html(&source, &settings);
    println!("{}", html);

    if args.copy {
        if !config.clipboard.enabled {
            bail!(syntaxview::clipboard::ClipboardError::Disabled);
        }
        let result = Copy::new().text(&html)?;
        eprintln!("{}", result.message());
    }
    Ok(())
}

/// Highlight the `source` parameter of a form-encoded request body.
#[cfg(not(tarpaulin_include))]
pub fn handle_request(file: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let body = super::read_input(file)?;

    let request =
        parse_request(body.trim_end_matches(['\r', '\n'])).context("Malformed request body")?;
    let Some(source) = request.source.as_deref() else {
        bail!("Request has no 'source' parameter");
    };

    let settings = Settings::from_request(&request, config.settings());
    tracing::debug!(?settings, "highlighting request");

    println!("{}", highlight_to_html(source, &settings));
    Ok(())
}
