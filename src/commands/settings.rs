//! Settings and stylesheet handlers

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use syntaxview::markup::{ClassBasedMarkupScheme, StyleScheme};
use syntaxview::option::{widgets_for, OptionWidget};
use syntaxview::params::{parse_request, Request};
use syntaxview::settings::RendererSettings;
use syntaxview::{Config, Profile, Settings};

#[derive(Serialize)]
struct SettingsReport {
    #[serde(flatten)]
    renderer: RendererSettings,
    widgets: BTreeMap<&'static str, OptionWidget>,
}

/// Print current and available settings, optionally applying a request body.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let request = match file {
        Some(path) => {
            let body = super::read_input(Some(path))?;
            parse_request(body.trim_end_matches(['\r', '\n'])).context("Malformed request body")?
        }
        None => Request::default(),
    };

    let settings = Settings::from_request(&request, config.settings());
    let report = SettingsReport {
        renderer: settings.renderer_settings(),
        widgets: widgets_for(&settings),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print the class-based stylesheet for a profile.
#[cfg(not(tarpaulin_include))]
pub fn handle_stylesheet(profile: Option<Profile>) -> Result<()> {
    let profile = match profile {
        Some(profile) => profile,
        None => Config::load()?.highlight.profile,
    };
    let scheme = ClassBasedMarkupScheme::new(StyleScheme::for_profile(profile));
    print!("{}", scheme.stylesheet());
    Ok(())
}
