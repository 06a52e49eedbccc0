//! Source tokenization for syntax highlighting.
//!
//! A [`Lexer`] finds the interesting regions of a source text (keywords,
//! comments, literals, tags...). [`Highlighter`] picks the lexer for a
//! [`Language`] and turns its output into a complete cover of the source,
//! filling the gaps with [`TokenKind::Plain`] tokens.

mod java;
mod lexer;
mod token;
mod xml;

pub use java::JavaLexer;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
pub use xml::XmlLexer;

use crate::settings::Language;

/// Drives a lexer over a source text.
pub struct Highlighter {
    lexer: Box<dyn Lexer>,
}

impl Highlighter {
    pub fn new(lexer: Box<dyn Lexer>) -> Self {
        Self { lexer }
    }

    /// Highlighter with the built-in lexer for `language`.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Java => Self::new(Box::new(JavaLexer::new())),
            Language::Xml => Self::new(Box::new(XmlLexer::new())),
        }
    }

    /// Highlighted tokens only.
    pub fn tokens(&self, source: &str) -> Vec<Token> {
        self.lexer.tokenize(source)
    }

    /// Tokens covering every byte of `source`, in order.
    ///
    /// Concatenating the text of the returned tokens reproduces `source`.
    /// Tokens that overlap an earlier token or fall outside the source are
    /// dropped.
    pub fn highlight(&self, source: &str) -> Vec<Token> {
        let mut cover = Vec::new();
        let mut cursor = 0;

        for token in self.tokens(source) {
            if token.start < cursor || token.end > source.len() || token.is_empty() {
                tracing::debug!(?token, cursor, "dropping misplaced token");
                continue;
            }
            if token.start > cursor {
                cover.push(Token::new(TokenKind::Plain, cursor, token.start));
            }
            cursor = token.end;
            cover.push(token);
        }

        if cursor < source.len() {
            cover.push(Token::new(TokenKind::Plain, cursor, source.len()));
        }

        cover
    }
}
