//! Decoding of `application/x-www-form-urlencoded` highlight requests.
//!
//! A request body looks like `profile=eclipse&language=java&source=...`.
//! Parameters are read until the `source` parameter; everything after
//! `source=` is the source text to highlight. The source is URL-decoded and
//! then HTML-entity-decoded, since browsers submit characters outside the
//! page encoding as numeric character references.

use crate::html::{self, EntityError};

/// Name of the parameter that carries the text to highlight.
pub const SOURCE_PARAM: &str = "source";

/// Errors from decoding a request body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("Incomplete percent escape at offset {offset}")]
    IncompleteEscape { offset: usize },

    #[error("Invalid hex digits '{digits}' in percent escape at offset {offset}")]
    InvalidHex { digits: String, offset: usize },

    #[error("Decoded text is not valid UTF-8")]
    InvalidUtf8,

    #[error(transparent)]
    Entity(#[from] EntityError),
}

/// A decoded highlight request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Parameters preceding `source`, in order of appearance.
    pub params: Vec<(String, String)>,
    /// The text to highlight, if the body had a `source` parameter.
    pub source: Option<String>,
}

impl Request {
    /// Value of the last occurrence of `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Decode `+` as space and `%HH` as a byte; the bytes are read as UTF-8.
pub fn url_decode(text: &str) -> Result<String, ParamsError> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let Some(pair) = bytes.get(i + 1..i + 3) else {
                    return Err(ParamsError::IncompleteEscape { offset: i });
                };
                let byte = hex_value(pair[0])
                    .zip(hex_value(pair[1]))
                    .map(|(hi, lo)| (hi << 4) | lo)
                    .ok_or_else(|| ParamsError::InvalidHex {
                        digits: String::from_utf8_lossy(pair).into_owned(),
                        offset: i,
                    })?;
                out.push(byte);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| ParamsError::InvalidUtf8)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parse a form body into parameters and source text.
///
/// Pairs without `=` are skipped. Parsing stops at the `source` parameter,
/// whose value extends to the end of the body.
pub fn parse_request(body: &str) -> Result<Request, ParamsError> {
    let mut request = Request::default();
    let mut rest = body;

    while !rest.is_empty() {
        let (pair, tail) = match rest.find('&') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };

        if let Some((key, value)) = pair.split_once('=') {
            let key = url_decode(key)?;
            if key == SOURCE_PARAM {
                // The source value runs to the end of the body, separators included
                let raw = &rest[pair.len() - value.len()..];
                let decoded = url_decode(raw)?;
                request.source = Some(html::decode_entities(&decoded)?);
                return Ok(request);
            }
            request.params.push((key, url_decode(value)?));
        } else if !pair.is_empty() {
            tracing::debug!(pair, "skipping request parameter without value");
        }

        rest = tail;
    }

    Ok(request)
}
