//! Recovery of raw source text from highlighted markup.
//!
//! Highlighted markup is what the renderer in [`crate::markup`] produces:
//! source text with `<`, `>` and `&` escaped and styled regions wrapped in
//! `span` elements. [`to_raw_text`] undoes that with an ordered list of
//! regex substitutions ([`ReplacementRules`]).
//!
//! Only `&lt;`, `&gt;` and `&amp;` are decoded. Other entities such as
//! `&quot;` are left as they are; use [`crate::html::decode_entities`] for
//! general HTML text.

mod rules;

pub use rules::{ReplacementRule, ReplacementRules};

use crate::clipboard::{ClipboardError, ClipboardSink, CopyResult};
use std::sync::LazyLock;

static DEFAULT_RULES: LazyLock<ReplacementRules> =
    LazyLock::new(ReplacementRules::highlighted_to_raw);

/// Convert highlighted markup to raw text with the built-in rules.
pub fn to_raw_text(markup: &str) -> String {
    DEFAULT_RULES.apply(markup)
}

/// Convert highlighted markup to raw text with caller-supplied rules.
pub fn to_raw_text_with(markup: &str, rules: &ReplacementRules) -> String {
    rules.apply(markup)
}

/// What [`prepare_raw_source`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareOutcome {
    /// Source or destination was missing; nothing was touched.
    Skipped,
    /// The destination received the raw text.
    Prepared {
        /// Set when the markup was also placed on the clipboard.
        copied: Option<CopyResult>,
    },
}

/// Fill `destination` with the raw text of `source`, optionally copying the
/// original markup to the clipboard first.
///
/// Returns [`PrepareOutcome::Skipped`] without side effects when either the
/// source markup or the destination is absent. A clipboard failure is
/// returned after the destination has been written.
pub fn prepare_raw_source(
    source: Option<&str>,
    destination: Option<&mut String>,
    clipboard: Option<&dyn ClipboardSink>,
) -> Result<PrepareOutcome, ClipboardError> {
    let (Some(markup), Some(destination)) = (source, destination) else {
        return Ok(PrepareOutcome::Skipped);
    };

    let copied = clipboard.map(|sink| sink.set_text(markup));

    *destination = to_raw_text(markup);

    match copied {
        None => Ok(PrepareOutcome::Prepared { copied: None }),
        Some(Ok(result)) => Ok(PrepareOutcome::Prepared {
            copied: Some(result),
        }),
        Some(Err(e)) => Err(e),
    }
}
