//! Name encoding for the lookup endpoint.
//!
//! The lookup service expects names in ISO-8859-1, form-urlencoded into the
//! `freetext` parameter.

mod latin1;

pub use latin1::{decode_markup, to_latin1, Charset};

use thiserror::Error;
use url::form_urlencoded;

/// The name has a character that ISO-8859-1 cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("name {name:?} contains {ch:?}, which has no ISO-8859-1 representation")]
pub struct EncodingError {
    pub name: String,
    pub ch: char,
}

/// A name paired with its encoded query form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    name: String,
    encoded: String,
}

impl LookupQuery {
    /// The original input name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The escaped query value, ready to substitute into the lookup URL.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

/// Re-encodes `name` into ISO-8859-1 and form-urlencodes the resulting bytes.
///
/// # Examples
///
/// - `encode("ada")` → `"ada"`
/// - `encode("Åsa Öberg")` → `"%C5sa+%D6berg"`
pub fn encode(name: &str) -> Result<LookupQuery, EncodingError> {
    let bytes = to_latin1(name).map_err(|ch| EncodingError {
        name: name.to_string(),
        ch,
    })?;
    let encoded: String = form_urlencoded::byte_serialize(&bytes).collect();
    Ok(LookupQuery {
        name: name.to_string(),
        encoded,
    })
}
