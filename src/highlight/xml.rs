//! XML lexer.

use super::lexer::{Lexer, Scanner};
use super::token::{Token, TokenKind};

/// Highlights tags, attributes, comments, CDATA sections, prologs and
/// entity references.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlLexer;

impl XmlLexer {
    pub fn new() -> Self {
        Self
    }
}

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b':') || b >= 0x80
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b':' || b >= 0x80
}

impl Lexer for XmlLexer {
    fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut s = Scanner::new(source);

        while let Some(b) = s.peek() {
            let start = s.pos();
            match b {
                b'<' if s.starts_with(b"<!--") => {
                    s.bump(4);
                    s.eat_through(b"-->");
                    s.emit(TokenKind::XmlComment, start);
                }
                b'<' if s.starts_with(b"<![CDATA[") => {
                    s.bump(9);
                    s.eat_through(b"]]>");
                    s.emit(TokenKind::XmlCdata, start);
                }
                b'<' if s.starts_with(b"<?") => {
                    s.bump(2);
                    s.eat_through(b"?>");
                    s.emit(TokenKind::XmlProlog, start);
                }
                b'<' if s.starts_with(b"<!") => {
                    s.bump(2);
                    s.eat_through(b">");
                    s.emit(TokenKind::XmlProlog, start);
                }
                b'<' => {
                    let closing = s.peek_at(1) == Some(b'/');
                    let name_at = if closing { 2 } else { 1 };
                    if s.peek_at(name_at).is_some_and(is_name_start) {
                        s.bump(name_at);
                        s.eat_while(is_name_char);
                        s.emit(TokenKind::XmlTag, start);
                        tag_body(&mut s);
                    } else {
                        s.bump(1);
                    }
                }
                b'&' => {
                    s.bump(1);
                    s.eat_while(|c| c.is_ascii_alphanumeric() || c == b'#');
                    if s.peek() == Some(b';') && s.pos() > start + 1 {
                        s.bump(1);
                        s.emit(TokenKind::XmlEntity, start);
                    }
                }
                _ => s.bump(1),
            }
        }

        s.finish()
    }
}

/// Attributes and the closing `>` or `/>` of a start or end tag.
fn tag_body(s: &mut Scanner<'_>) {
    while let Some(b) = s.peek() {
        let start = s.pos();
        match b {
            b'>' => {
                s.bump(1);
                s.emit(TokenKind::XmlTag, start);
                return;
            }
            b'/' if s.peek_at(1) == Some(b'>') => {
                s.bump(2);
                s.emit(TokenKind::XmlTag, start);
                return;
            }
            b'"' | b'\'' => {
                s.bump(1);
                s.eat_until(b);
                s.bump(1);
                s.emit(TokenKind::XmlAttributeValue, start);
            }
            // A stray `<` means the tag was never closed
            b'<' => return,
            b if is_name_start(b) => {
                s.eat_while(is_name_char);
                s.emit(TokenKind::XmlAttribute, start);
            }
            _ => s.bump(1),
        }
    }
}
