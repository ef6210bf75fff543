//! ISO-8859-1 conversion in both directions.

use std::borrow::Cow;

/// Converts `s` to ISO-8859-1 bytes. Returns the first character above U+00FF on failure.
pub fn to_latin1(s: &str) -> Result<Vec<u8>, char> {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| c))
        .collect()
}

/// Character set a lookup body was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Latin1,
}

/// Decodes a lookup response body: UTF-8 when valid, else ISO-8859-1.
/// Never fails; every byte maps to exactly one code point in the fallback.
pub fn decode_markup(body: &[u8]) -> (Cow<'_, str>, Charset) {
    match std::str::from_utf8(body) {
        Ok(s) => (Cow::Borrowed(s), Charset::Utf8),
        Err(_) => (
            Cow::Owned(body.iter().map(|&b| char::from(b)).collect()),
            Charset::Latin1,
        ),
    }
}
