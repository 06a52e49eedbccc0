//! Lexer trait and scanning helpers shared by the language lexers.

use super::token::{Token, TokenKind};

/// Splits source text into highlighted tokens.
///
/// Implementations return tokens sorted by offset and non-overlapping. Text
/// that needs no highlighting is simply not covered by any token. Constructs
/// left open at the end of input (an unterminated comment, say) extend to
/// the end of the source.
pub trait Lexer: Send + Sync {
    fn tokenize(&self, source: &str) -> Vec<Token>;
}

/// Cursor over the bytes of a source string.
///
/// Lexers only branch on ASCII bytes, so offsets produced by the cursor always
/// fall on UTF-8 character boundaries.
pub(crate) struct Scanner<'s> {
    bytes: &'s [u8],
    pos: usize,
    tokens: Vec<Token>,
}

impl<'s> Scanner<'s> {
    pub(crate) fn new(source: &'s str) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    pub(crate) fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes[self.pos..].starts_with(prefix)
    }

    pub(crate) fn bump(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    /// Advance while `pred` holds.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Advance past the next occurrence of `terminator`, or to the end.
    pub(crate) fn eat_through(&mut self, terminator: &[u8]) {
        match find(&self.bytes[self.pos..], terminator) {
            Some(i) => self.pos += i + terminator.len(),
            None => self.pos = self.bytes.len(),
        }
    }

    /// Advance to (not past) the next `b`, or to the end.
    pub(crate) fn eat_until(&mut self, b: u8) {
        match self.bytes[self.pos..].iter().position(|&c| c == b) {
            Some(i) => self.pos += i,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Record a token from `start` to the current position.
    pub(crate) fn emit(&mut self, kind: TokenKind, start: usize) {
        if self.pos > start {
            self.tokens.push(Token::new(kind, start, self.pos));
        }
    }

    pub(crate) fn emit_range(&mut self, kind: TokenKind, start: usize, end: usize) {
        if end > start {
            self.tokens.push(Token::new(kind, start, end));
        }
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'s [u8] {
        &self.bytes[start..end]
    }

    pub(crate) fn finish(self) -> Vec<Token> {
        self.tokens
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Identifier start: ASCII letters, `_`, `$` and any non-ASCII byte.
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

pub(crate) fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}
