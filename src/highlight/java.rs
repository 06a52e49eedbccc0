//! Java lexer.

use super::lexer::{is_ident_continue, is_ident_start, Lexer, Scanner};
use super::token::{Token, TokenKind};

/// Reserved words plus the `true`, `false` and `null` literals.
const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Highlights Java keywords, comments, javadoc tags, literals and annotations.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaLexer;

impl JavaLexer {
    pub fn new() -> Self {
        Self
    }
}

impl Lexer for JavaLexer {
    fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut s = Scanner::new(source);

        while let Some(b) = s.peek() {
            let start = s.pos();
            match b {
                b'/' if s.starts_with(b"//") => {
                    s.eat_until(b'\n');
                    s.emit(TokenKind::LineComment, start);
                }
                b'/' if s.starts_with(b"/**") && !s.starts_with(b"/**/") => javadoc(&mut s),
                b'/' if s.starts_with(b"/*") => {
                    s.bump(2);
                    s.eat_through(b"*/");
                    s.emit(TokenKind::BlockComment, start);
                }
                b'"' if s.starts_with(b"\"\"\"") => {
                    s.bump(3);
                    text_block(&mut s);
                    s.emit(TokenKind::StringLiteral, start);
                }
                b'"' => {
                    quoted(&mut s, b'"');
                    s.emit(TokenKind::StringLiteral, start);
                }
                b'\'' => {
                    quoted(&mut s, b'\'');
                    s.emit(TokenKind::CharLiteral, start);
                }
                b'0'..=b'9' => {
                    number(&mut s);
                    s.emit(TokenKind::Number, start);
                }
                b'.' if s.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                    number(&mut s);
                    s.emit(TokenKind::Number, start);
                }
                b'@' if s.peek_at(1).is_some_and(is_ident_start) => {
                    s.bump(1);
                    s.eat_while(is_ident_continue);
                    let kind = if s.slice(start, s.pos()) == b"@interface" {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Annotation
                    };
                    s.emit(kind, start);
                }
                b if is_ident_start(b) => {
                    s.eat_while(is_ident_continue);
                    let word = s.slice(start, s.pos());
                    if KEYWORDS.iter().any(|k| k.as_bytes() == word) {
                        s.emit(TokenKind::Keyword, start);
                    }
                }
                _ => s.bump(1),
            }
        }

        s.finish()
    }
}

/// `/** ... */`, split into javadoc text and `@tag` tokens.
fn javadoc(s: &mut Scanner<'_>) {
    let mut segment_start = s.pos();
    s.bump(3);

    while !s.at_end() {
        if s.starts_with(b"*/") {
            s.bump(2);
            break;
        }
        let at = s.pos();
        let tag_position = at > 0 && matches!(s.slice(at - 1, at)[0], b' ' | b'\t' | b'*' | b'\n' | b'{');
        if s.peek() == Some(b'@') && tag_position && s.peek_at(1).is_some_and(|c| c.is_ascii_alphabetic()) {
            s.emit_range(TokenKind::Javadoc, segment_start, at);
            s.bump(1);
            s.eat_while(|c| c.is_ascii_alphanumeric());
            s.emit(TokenKind::JavadocTag, at);
            segment_start = s.pos();
        } else {
            s.bump(1);
        }
    }

    s.emit(TokenKind::Javadoc, segment_start);
}

/// A string or char literal. Stops at the closing quote or, unterminated, at
/// the end of the line.
fn quoted(s: &mut Scanner<'_>, quote: u8) {
    s.bump(1);
    while let Some(b) = s.peek() {
        match b {
            b'\\' => s.bump(2),
            b'\n' => return,
            b if b == quote => {
                s.bump(1);
                return;
            }
            _ => s.bump(1),
        }
    }
}

/// Body of a `"""` text block, after the opening delimiter.
fn text_block(s: &mut Scanner<'_>) {
    while let Some(b) = s.peek() {
        if b == b'\\' {
            s.bump(2);
        } else if s.starts_with(b"\"\"\"") {
            s.bump(3);
            return;
        } else {
            s.bump(1);
        }
    }
}

/// Decimal, hex, octal, binary and floating point literals with suffixes.
fn number(s: &mut Scanner<'_>) {
    let hex = s.starts_with(b"0x") || s.starts_with(b"0X");
    if hex {
        s.bump(2);
    }
    while let Some(b) = s.peek() {
        let exponent = if hex { b"pP" } else { b"eE" };
        if exponent.contains(&b) && matches!(s.peek_at(1), Some(b'+' | b'-')) {
            s.bump(2);
        } else if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' {
            s.bump(1);
        } else {
            break;
        }
    }
}
