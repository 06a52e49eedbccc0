//! Style rules and the per-profile style schemes.

use crate::highlight::TokenKind;
use crate::settings::Profile;
use std::collections::BTreeMap;

/// CSS properties a style rule can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttribute {
    Color,
    BackgroundColor,
    FontWeight,
    FontStyle,
    TextDecoration,
}

impl StyleAttribute {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::FontWeight => "font-weight",
            Self::FontStyle => "font-style",
            Self::TextDecoration => "text-decoration",
        }
    }
}

/// One CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub attribute: StyleAttribute,
    pub value: String,
}

impl StyleRule {
    pub fn new(attribute: StyleAttribute, value: impl Into<String>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }

    pub fn color(value: &str) -> Self {
        Self::new(StyleAttribute::Color, value)
    }

    pub fn background(value: &str) -> Self {
        Self::new(StyleAttribute::BackgroundColor, value)
    }

    pub fn bold() -> Self {
        Self::new(StyleAttribute::FontWeight, "bold")
    }

    pub fn italic() -> Self {
        Self::new(StyleAttribute::FontStyle, "italic")
    }

    pub fn underline() -> Self {
        Self::new(StyleAttribute::TextDecoration, "underline")
    }

    /// `name:value;`
    pub fn declaration(&self) -> String {
        format!("{}:{};", self.attribute.css_name(), self.value)
    }
}

/// Style rules for each token kind, for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleScheme {
    profile: Profile,
    rules: BTreeMap<TokenKind, Vec<StyleRule>>,
}

impl StyleScheme {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            rules: BTreeMap::new(),
        }
    }

    /// Built-in scheme for `profile`.
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Idea => Self::idea(),
            Profile::Eclipse => Self::eclipse(),
            Profile::Netbeans => Self::netbeans(),
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Append rules for `kind`, after any already registered.
    pub fn register(&mut self, kind: TokenKind, rules: impl IntoIterator<Item = StyleRule>) {
        self.rules.entry(kind).or_default().extend(rules);
    }

    /// Rules for `kind`; empty when the kind is not styled.
    pub fn rules(&self, kind: TokenKind) -> &[StyleRule] {
        self.rules.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Kinds that have at least one rule.
    pub fn supported_kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.rules
            .iter()
            .filter(|(_, rules)| !rules.is_empty())
            .map(|(kind, _)| *kind)
    }

    /// IntelliJ IDEA default colours.
    pub fn idea() -> Self {
        use TokenKind::*;

        let mut scheme = Self::new(Profile::Idea);
        let comment = [StyleRule::color("#808080"), StyleRule::italic()];
        scheme.register(LineComment, comment.clone());
        scheme.register(BlockComment, comment.clone());
        scheme.register(Javadoc, comment.clone());
        scheme.register(JavadocTag, comment);
        scheme.register(JavadocTag, [StyleRule::bold(), StyleRule::underline()]);

        scheme.register(Keyword, [StyleRule::color("#000080"), StyleRule::bold()]);
        scheme.register(StringLiteral, [StyleRule::color("#008000"), StyleRule::bold()]);
        scheme.register(CharLiteral, [StyleRule::color("#008000"), StyleRule::bold()]);
        scheme.register(Number, [StyleRule::color("#0000ff")]);
        scheme.register(Annotation, [StyleRule::color("#808000")]);

        scheme.register(XmlTag, [StyleRule::color("#000080"), StyleRule::bold()]);
        scheme.register(XmlAttribute, [StyleRule::color("#0000ff"), StyleRule::bold()]);
        scheme.register(XmlAttributeValue, [StyleRule::color("#008000"), StyleRule::bold()]);
        scheme.register(XmlComment, [StyleRule::color("#808080"), StyleRule::italic()]);
        scheme.register(XmlCdata, [StyleRule::color("#008000")]);
        scheme.register(XmlProlog, [StyleRule::color("#000080")]);
        scheme.register(XmlEntity, [StyleRule::color("#0000ff")]);
        scheme
    }

    /// Eclipse default colours.
    pub fn eclipse() -> Self {
        use TokenKind::*;

        let mut scheme = Self::new(Profile::Eclipse);
        scheme.register(LineComment, [StyleRule::color("#3f7f5f")]);
        scheme.register(BlockComment, [StyleRule::color("#3f7f5f")]);
        scheme.register(Javadoc, [StyleRule::color("#3f5fbf")]);
        scheme.register(
            JavadocTag,
            [
                StyleRule::color("#7f9fc5"),
                StyleRule::underline(),
                StyleRule::bold(),
            ],
        );

        scheme.register(Keyword, [StyleRule::color("#7f0058"), StyleRule::bold()]);
        scheme.register(StringLiteral, [StyleRule::color("#2a00ff")]);
        scheme.register(CharLiteral, [StyleRule::color("#2a00ff")]);
        scheme.register(Annotation, [StyleRule::color("#646464")]);

        scheme.register(XmlTag, [StyleRule::color("#3f7f7f")]);
        scheme.register(XmlAttribute, [StyleRule::color("#7f007f")]);
        scheme.register(XmlAttributeValue, [StyleRule::color("#2a00ff"), StyleRule::italic()]);
        scheme.register(XmlComment, [StyleRule::color("#3f5fbf")]);
        scheme.register(XmlCdata, [StyleRule::background("#e2ffe2")]);
        scheme.register(XmlProlog, [StyleRule::color("#3f7f7f")]);
        scheme.register(XmlEntity, [StyleRule::color("#2a00ff")]);
        scheme
    }

    /// NetBeans default colours.
    pub fn netbeans() -> Self {
        use TokenKind::*;

        let mut scheme = Self::new(Profile::Netbeans);
        for kind in TokenKind::ALL.into_iter().filter(|k| k.is_comment()) {
            scheme.register(kind, [StyleRule::color("#969696")]);
        }
        scheme.register(JavadocTag, [StyleRule::bold()]);

        scheme.register(StringLiteral, [StyleRule::color("#ce7b00")]);
        scheme.register(CharLiteral, [StyleRule::color("#ce7b00")]);
        scheme.register(Keyword, [StyleRule::color("#0000ee")]);
        scheme.register(Annotation, [StyleRule::color("#808080")]);

        scheme.register(XmlTag, [StyleRule::color("#0000e6")]);
        scheme.register(XmlAttribute, [StyleRule::color("#009900")]);
        scheme.register(XmlAttributeValue, [StyleRule::color("#ce7b00")]);
        scheme.register(XmlComment, [StyleRule::color("#969696")]);
        scheme.register(XmlCdata, [StyleRule::color("#969696")]);
        scheme.register(XmlProlog, [StyleRule::color("#969696")]);
        scheme.register(XmlEntity, [StyleRule::color("#b20000")]);
        scheme
    }
}
