//! HTML escaping and character entity decoding.
//!
//! [`escape`] escapes exactly the characters that [`crate::raw`] decodes, so
//! rendered markup converts back to its source. [`decode_entities`] is the
//! general decoder used for request input: named entities, decimal
//! (`&#1090;`) and hexadecimal (`&#x442;`) character references.

use std::borrow::Cow;

/// Errors from decoding malformed numeric character references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error("Empty numeric character reference at offset {offset}")]
    EmptyNumeric { offset: usize },

    #[error("Invalid digit '{digit}' in character reference at offset {offset}")]
    InvalidDigit { digit: char, offset: usize },

    #[error("Character reference '{reference}' at offset {offset} is not a valid code point")]
    InvalidCodePoint { reference: String, offset: usize },
}

/// Named entities understood by [`decode_entities`].
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '\u{a9}'),
    ("reg", '\u{ae}'),
];

/// Longest entity body (between `&` and `;`) worth looking at.
const MAX_ENTITY_LEN: usize = 10;

/// Most digits in a decimal reference: `&#65535;`.
const MAX_DECIMAL_DIGITS: usize = 5;

/// Most digits in a hexadecimal reference: `&#xFFFF;`.
const MAX_HEX_DIGITS: usize = 4;

/// Escape `&`, `<` and `>`.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Decode named entities and numeric character references.
///
/// Unknown named entities and a bare `&` are copied through unchanged.
/// Numeric references must be well formed.
pub fn decode_entities(text: &str) -> Result<String, EntityError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut offset = 0;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        offset += amp;
        rest = &rest[amp..];

        let body_end = rest[1..]
            .char_indices()
            .take(MAX_ENTITY_LEN + 1)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i + 1);

        let consumed = match body_end {
            Some(semi) => {
                let body = &rest[1..semi];
                match decode_body(body, offset)? {
                    Some(c) => {
                        out.push(c);
                        semi + 1
                    }
                    None => {
                        out.push('&');
                        1
                    }
                }
            }
            None if rest[1..].starts_with('#') => {
                // `&#` without a terminating `;` within reach
                let digits: String = rest[2..].chars().take(MAX_ENTITY_LEN).collect();
                return Err(EntityError::InvalidCodePoint {
                    reference: format!("&#{}", digits),
                    offset,
                });
            }
            None => {
                out.push('&');
                1
            }
        };

        offset += consumed;
        rest = &rest[consumed..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Decode an entity body (the text between `&` and `;`).
///
/// Returns `Ok(None)` for names that are not known entities.
fn decode_body(body: &str, offset: usize) -> Result<Option<char>, EntityError> {
    let Some(numeric) = body.strip_prefix('#') else {
        return Ok(NAMED_ENTITIES
            .iter()
            .find(|(name, _)| *name == body)
            .map(|&(_, c)| c));
    };

    let (digits, radix, max_digits) = match numeric.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16, MAX_HEX_DIGITS),
        None => (numeric, 10, MAX_DECIMAL_DIGITS),
    };

    if digits.is_empty() {
        return Err(EntityError::EmptyNumeric { offset });
    }

    let invalid = || EntityError::InvalidCodePoint {
        reference: format!("&{};", body),
        offset,
    };

    if digits.chars().count() > max_digits {
        return Err(invalid());
    }

    let mut value: u32 = 0;
    for digit in digits.chars() {
        let d = digit
            .to_digit(radix)
            .ok_or(EntityError::InvalidDigit { digit, offset })?;
        value = value * radix + d;
    }

    char::from_u32(value).map(Some).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn escape_leaves_quotes() {
        assert_eq!(escape(r#"say "hi" 'there'"#), r#"say "hi" 'there'"#);
    }

    #[test]
    fn decodes_decimal_references() {
        assert_eq!(
            decode_entities("&#1090;&#1077;&#1089;&#1090;").unwrap(),
            "\u{442}\u{435}\u{441}\u{442}"
        );
        assert_eq!(decode_entities("&#33;&#36;&#35;").unwrap(), "!$#");
    }

    #[test]
    fn decodes_hex_references() {
        assert_eq!(decode_entities("&#x442;&#X41;").unwrap(), "\u{442}A");
    }

    #[test]
    fn decodes_named_entities() {
        assert_eq!(
            decode_entities("&lt;a href=&quot;x&quot;&gt; &amp; &apos;").unwrap(),
            "<a href=\"x\"> & '"
        );
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(decode_entities("&bogus; &").unwrap(), "&bogus; &");
    }

    #[test]
    fn ampersand_without_semicolon_passes_through() {
        assert_eq!(decode_entities("a && b").unwrap(), "a && b");
    }

    #[test]
    fn keeps_surrounding_text() {
        assert_eq!(
            decode_entities("int x = a &lt; b;").unwrap(),
            "int x = a < b;"
        );
    }

    #[test]
    fn empty_decimal_reference_is_an_error() {
        assert_eq!(
            decode_entities("&#;"),
            Err(EntityError::EmptyNumeric { offset: 0 })
        );
        assert_eq!(
            decode_entities("ab&#x;"),
            Err(EntityError::EmptyNumeric { offset: 2 })
        );
    }

    #[test]
    fn too_large_reference_is_an_error() {
        assert!(matches!(
            decode_entities("&#11141120;"),
            Err(EntityError::InvalidCodePoint { .. })
        ));
        assert!(matches!(
            decode_entities("&#99999999999;"),
            Err(EntityError::InvalidCodePoint { .. })
        ));
    }

    #[test]
    fn too_many_decimal_digits_is_an_error() {
        let reference = format!("&#{}1;", u16::MAX);

        assert_eq!(
            decode_entities(&reference),
            Err(EntityError::InvalidCodePoint {
                reference: "&#655351;".to_string(),
                offset: 0
            })
        );
    }

    #[test]
    fn largest_references_decode() {
        assert_eq!(decode_entities("&#65535;").unwrap(), "\u{ffff}");
        assert_eq!(decode_entities("&#xFFFF;").unwrap(), "\u{ffff}");
        assert_eq!(decode_entities("&#00065;").unwrap(), "A");
    }

    #[test]
    fn too_many_hex_digits_is_an_error() {
        assert!(matches!(
            decode_entities("&#x1F600;"),
            Err(EntityError::InvalidCodePoint { .. })
        ));
    }

    #[test]
    fn surrogate_reference_is_an_error() {
        assert!(matches!(
            decode_entities("&#xD800;"),
            Err(EntityError::InvalidCodePoint { .. })
        ));
    }

    #[test]
    fn bad_digit_is_an_error() {
        assert_eq!(
            decode_entities("&#12a;"),
            Err(EntityError::InvalidDigit {
                digit: 'a',
                offset: 0
            })
        );
    }

    #[test]
    fn escape_then_decode_round_trips() {
        let source = "if (a < b && b > c) { return \"x\"; }";
        assert_eq!(decode_entities(&escape(source)).unwrap(), source);
    }
}
