//! syntaxview - syntax highlighting to HTML and back.
//!
//! - [`highlight`] tokenizes Java and XML source
//! - [`markup`] renders tokens as HTML in an IDE colour profile
//! - [`raw`] recovers the raw source from highlighted HTML
//! - [`params`], [`html`] and [`settings`] decode highlight requests
//! - [`clipboard`] puts markup on the system clipboard
//! - [`option`] models the settings widgets of the highlight page

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod highlight;
pub mod html;
pub mod markup;
pub mod option;
pub mod params;
pub mod raw;
pub mod settings;

pub use config::Config;
pub use raw::{prepare_raw_source, to_raw_text, PrepareOutcome, ReplacementRules};
pub use settings::{Language, MarkupType, Profile, Settings};
