//! Highlighted HTML output.
//!
//! [`StyleScheme`] holds the colours of an IDE profile, a [`MarkupScheme`]
//! decides how they are attached to the output (inline `style` or `class`),
//! and [`render`] writes the `span`-wrapped, escaped HTML.

mod render;
mod scheme;
mod style;

pub use render::render;
pub use scheme::{
    class_name, scheme_for, ClassBasedMarkupScheme, InlineStyleMarkupScheme, MarkupScheme,
    CLASS_PREFIX,
};
pub use style::{StyleAttribute, StyleRule, StyleScheme};

use crate::highlight::Highlighter;
use crate::settings::Settings;

/// Highlight `source` according to `settings` and render it as HTML.
pub fn highlight_to_html(source: &str, settings: &Settings) -> String {
    let tokens = Highlighter::for_language(settings.language).highlight(source);
    let scheme = scheme_for(settings.markup, settings.profile);
    render(source, &tokens, scheme.as_ref())
}
