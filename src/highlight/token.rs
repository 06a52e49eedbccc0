//! Token model shared by all lexers.

use std::ops::Range;

/// What a highlighted region of source is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Keyword,
    LineComment,
    BlockComment,
    Javadoc,
    /// `@param`, `@return`, ... inside a javadoc comment
    JavadocTag,
    StringLiteral,
    CharLiteral,
    Number,
    Annotation,
    /// `<name`, `</name`, `>` and `/>`
    XmlTag,
    XmlAttribute,
    XmlAttributeValue,
    XmlComment,
    XmlCdata,
    /// `<?xml ...?>` and `<!DOCTYPE ...>`
    XmlProlog,
    XmlEntity,
    /// Text between highlighted tokens
    Plain,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 17] = [
        Self::Keyword,
        Self::LineComment,
        Self::BlockComment,
        Self::Javadoc,
        Self::JavadocTag,
        Self::StringLiteral,
        Self::CharLiteral,
        Self::Number,
        Self::Annotation,
        Self::XmlTag,
        Self::XmlAttribute,
        Self::XmlAttributeValue,
        Self::XmlComment,
        Self::XmlCdata,
        Self::XmlProlog,
        Self::XmlEntity,
        Self::Plain,
    ];

    /// Kebab-case identifier, used for CSS class names.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::LineComment => "line-comment",
            Self::BlockComment => "block-comment",
            Self::Javadoc => "javadoc",
            Self::JavadocTag => "javadoc-tag",
            Self::StringLiteral => "string",
            Self::CharLiteral => "char",
            Self::Number => "number",
            Self::Annotation => "annotation",
            Self::XmlTag => "xml-tag",
            Self::XmlAttribute => "xml-attribute",
            Self::XmlAttributeValue => "xml-attribute-value",
            Self::XmlComment => "xml-comment",
            Self::XmlCdata => "xml-cdata",
            Self::XmlProlog => "xml-prolog",
            Self::XmlEntity => "xml-entity",
            Self::Plain => "plain",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Self::LineComment | Self::BlockComment | Self::Javadoc | Self::JavadocTag
        )
    }
}

/// A region of the source, as byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The token's text within `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.range()]
    }
}
