//! Markup schemes: how a token's style is attached to its `span`.

use super::style::StyleScheme;
use crate::highlight::TokenKind;
use crate::settings::{MarkupType, Profile};
use std::collections::BTreeMap;

/// Prefix of the CSS classes emitted by [`ClassBasedMarkupScheme`].
pub const CLASS_PREFIX: &str = "sv-";

/// Supplies the attributes of the `span` wrapping a token.
pub trait MarkupScheme: Send + Sync {
    /// Attribute text such as `style="color:#808080;"`, or `None` when
    /// tokens of this kind are left unwrapped.
    fn attributes(&self, kind: TokenKind) -> Option<&str>;
}

/// Styles every span inline with a `style` attribute.
#[derive(Debug, Clone)]
pub struct InlineStyleMarkupScheme {
    markup: BTreeMap<TokenKind, String>,
}

impl InlineStyleMarkupScheme {
    pub fn new(styles: &StyleScheme) -> Self {
        let markup = styles
            .supported_kinds()
            .map(|kind| {
                let declarations: String =
                    styles.rules(kind).iter().map(|r| r.declaration()).collect();
                (kind, format!("style=\"{}\"", declarations))
            })
            .collect();
        Self { markup }
    }
}

impl MarkupScheme for InlineStyleMarkupScheme {
    fn attributes(&self, kind: TokenKind) -> Option<&str> {
        self.markup.get(&kind).map(String::as_str)
    }
}

/// Marks spans with a CSS class; [`Self::stylesheet`] supplies the rules.
#[derive(Debug, Clone)]
pub struct ClassBasedMarkupScheme {
    styles: StyleScheme,
    markup: BTreeMap<TokenKind, String>,
}

impl ClassBasedMarkupScheme {
    pub fn new(styles: StyleScheme) -> Self {
        let markup = styles
            .supported_kinds()
            .map(|kind| (kind, format!("class=\"{}\"", class_name(kind))))
            .collect();
        Self { styles, markup }
    }

    /// CSS for every styled token kind, one rule per line.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for kind in self.styles.supported_kinds() {
            let declarations: String = self
                .styles
                .rules(kind)
                .iter()
                .map(|r| r.declaration())
                .collect();
            css.push_str(&format!(".{} {{ {} }}\n", class_name(kind), declarations));
        }
        css
    }
}

impl MarkupScheme for ClassBasedMarkupScheme {
    fn attributes(&self, kind: TokenKind) -> Option<&str> {
        self.markup.get(&kind).map(String::as_str)
    }
}

/// CSS class for a token kind, e.g. `sv-line-comment`.
pub fn class_name(kind: TokenKind) -> String {
    format!("{}{}", CLASS_PREFIX, kind.css_name())
}

/// Markup scheme for the given markup type and profile.
pub fn scheme_for(markup: MarkupType, profile: Profile) -> Box<dyn MarkupScheme> {
    let styles = StyleScheme::for_profile(profile);
    match markup {
        MarkupType::Inline => Box::new(InlineStyleMarkupScheme::new(&styles)),
        MarkupType::ClassBased => Box::new(ClassBasedMarkupScheme::new(styles)),
    }
}
