//! Config subcommands handler

use anyhow::{bail, Result};

use syntaxview::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a config file with default settings.
///
/// Refuses to overwrite an existing file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init() -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() {
        bail!("Config file already exists: {}", config_path.display());
    }

    Config::default().save()?;
    println!("Created {}", config_path.display());
    Ok(())
}
