//! Image reference extraction from lookup markup.

use percent_encoding::{percent_encode, CONTROLS};
use scraper::{Html, Node};
use thiserror::Error;
use url::Url;

use crate::query::{to_latin1, Charset};

/// Why an `img src` value was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SrcError {
    #[error("control character {0:?}")]
    ControlChar(char),
    #[error("invalid percent escape at byte {0}")]
    BadEscape(usize),
    #[error("character {0:?} does not fit the page charset")]
    Unrepresentable(char),
    #[error(transparent)]
    Parse(#[from] url::ParseError),
}

/// Returns every `<img src>` in `markup`, appended to `base`, in document order.
///
/// Walks the node tree depth-first with an explicit stack. `src` values that do
/// not form a valid URL are skipped.
pub fn extract_image_urls(markup: &str, base: &Url, charset: Charset) -> Vec<Url> {
    let document = Html::parse_document(markup);
    if !document.errors.is_empty() {
        tracing::debug!(errors = document.errors.len(), "lookup markup had parse errors");
    }

    let mut urls = Vec::new();
    let mut stack = vec![document.tree.root()];
    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node.value() {
            if element.name() == "img" {
                if let Some(src) = element.attr("src") {
                    match resolve_src(base, src, charset) {
                        Ok(url) => urls.push(url),
                        Err(e) => tracing::debug!(src, error = %e, "skipping unparseable img src"),
                    }
                }
            }
        }
        // Reverse so the first child is popped next.
        stack.extend(node.children().rev());
    }
    urls
}

/// Builds `<base><src>` and parses it.
///
/// `src` is appended verbatim, so root-relative and absolute values stay under
/// the base path. Non-ASCII characters are escaped as the page's own bytes:
/// one `%XX` per Latin-1 byte, or the UTF-8 sequence for UTF-8 pages.
pub fn resolve_src(base: &Url, src: &str, charset: Charset) -> Result<Url, SrcError> {
    if let Some(c) = src.chars().find(|c| c.is_ascii_control()) {
        return Err(SrcError::ControlChar(c));
    }
    check_escapes(src)?;

    let bytes = match charset {
        Charset::Utf8 => src.as_bytes().to_vec(),
        Charset::Latin1 => to_latin1(src).map_err(SrcError::Unrepresentable)?,
    };
    // Controls are rejected above, so only non-ASCII bytes get escaped here.
    let escaped = percent_encode(&bytes, CONTROLS).to_string();
    Ok(Url::parse(&format!("{}{}", base, escaped))?)
}

/// Every `%` must start a two-digit hex escape.
fn check_escapes(src: &str) -> Result<(), SrcError> {
    let bytes = src.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'%' {
            continue;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(SrcError::BadEscape(i));
        }
    }
    Ok(())
}
