//! syntaxview command line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use syntaxview::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "SYNTAXVIEW_LOG";

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Raw { file } => commands::raw::handle(file.as_deref()),
        Commands::Highlight(args) => commands::highlight::handle(&args),
        Commands::Request { file } => commands::highlight::handle_request(file.as_deref()),
        Commands::Copy { file } => commands::copy::handle(file.as_deref()),
        Commands::Settings { file } => commands::settings::handle(file.as_deref()),
        Commands::Stylesheet { profile } => commands::settings::handle_stylesheet(profile),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Config(ConfigCommands::Init) => commands::config::handle_init(),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
