//! Command line interface definitions.
//!
//! Lives in the library so that `xtask` can generate the man page from the
//! same definitions the binary parses.

use crate::settings::{Language, MarkupType, Profile};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("SYNTAXVIEW_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("SYNTAXVIEW_BUILD_DATE"),
    ")"
);

/// Syntax highlighting to HTML, and raw source back from highlighted HTML.
#[derive(Debug, Parser)]
#[command(name = "syntaxview", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert highlighted HTML back to raw source text
    Raw {
        /// File with highlighted markup (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Highlight source code as HTML
    Highlight(HighlightArgs),

    /// Highlight the source of a form-encoded request body
    ///
    /// The body looks like `profile=eclipse&language=java&source=...`.
    Request {
        /// File with the request body (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Copy highlighted markup to the clipboard and print its raw text
    Copy {
        /// File with highlighted markup (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print current and available settings as JSON
    Settings {
        /// Request body to take settings from
        file: Option<PathBuf>,
    },

    /// Print the CSS for class-based markup
    Stylesheet {
        /// Colour profile
        #[arg(long, value_enum)]
        profile: Option<Profile>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct HighlightArgs {
    /// Source file (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Colour profile
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,

    /// Source language
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Markup flavour
    #[arg(long, value_enum)]
    pub markup: Option<MarkupType>,

    /// Also copy the HTML to the clipboard
    #[arg(long)]
    pub copy: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a config file with default settings if none exists
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn highlight_flags_parse() {
        let cli = Cli::parse_from([
            "syntaxview",
            "highlight",
            "--profile",
            "eclipse",
            "--markup",
            "class-based",
            "Foo.java",
        ]);

        let Commands::Highlight(args) = cli.command else {
            panic!("expected highlight");
        };
        assert_eq!(args.profile, Some(Profile::Eclipse));
        assert_eq!(args.markup, Some(MarkupType::ClassBased));
        assert_eq!(args.language, None);
        assert_eq!(args.file, Some(PathBuf::from("Foo.java")));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["syntaxview", "raw", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
