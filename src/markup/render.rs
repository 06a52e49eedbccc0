//! Rendering of tokens to highlighted HTML.

use super::scheme::MarkupScheme;
use crate::highlight::{Token, TokenKind};
use crate::html;

/// Render `source` as HTML, wrapping styled tokens in `span` elements.
///
/// `tokens` is expected to cover `source` in order (see
/// [`crate::highlight::Highlighter::highlight`]). Text is escaped so that
/// [`crate::raw::to_raw_text`] recovers the source.
pub fn render(source: &str, tokens: &[Token], scheme: &dyn MarkupScheme) -> String {
    let mut out = String::with_capacity(source.len() * 2);

    for token in tokens {
        let text = html::escape(token.text(source));
        let attributes = match token.kind {
            TokenKind::Plain => None,
            kind => scheme.attributes(kind),
        };
        match attributes {
            Some(attributes) => {
                out.push_str("<span ");
                out.push_str(attributes);
                out.push('>');
                out.push_str(&text);
                out.push_str("</span>");
            }
            None => out.push_str(&text),
        }
    }

    out
}
