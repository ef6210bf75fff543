//! Name → image URL resolution against the lookup service.
//!
//! One GET per name; the returned page is scanned for `<img>` elements whose
//! `src` is appended to the image base URL.

mod extract;

pub use extract::{extract_image_urls, resolve_src, SrcError};

use anyhow::{Context, Result};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::fetch::{FetchError, Fetcher};
use crate::query::{decode_markup, EncodingError, LookupQuery};

/// Placeholder in the lookup template that receives the encoded name.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// A resolved image URL and the name it was found for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub name: String,
    pub url: Url,
}

/// Why a name did not resolve to an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("lookup failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("no match found for {name:?}")]
    NotFound { name: String },
    #[error("lookup task for {name:?} did not finish: {reason}")]
    Task { name: String, reason: String },
}

/// Looks names up and extracts candidate image URLs from the result page.
#[derive(Clone)]
pub struct ImageResolver {
    fetcher: Arc<dyn Fetcher>,
    lookup_url: String,
    image_base: Url,
}

impl ImageResolver {
    /// `lookup_url` must contain `{query}`; `image_base_url` must be an absolute URL.
    pub fn new(fetcher: Arc<dyn Fetcher>, lookup_url: &str, image_base_url: &str) -> Result<Self> {
        if !lookup_url.contains(QUERY_PLACEHOLDER) {
            anyhow::bail!("lookup URL {:?} has no {} placeholder", lookup_url, QUERY_PLACEHOLDER);
        }
        let image_base = Url::parse(image_base_url)
            .with_context(|| format!("invalid image base URL: {}", image_base_url))?;
        Ok(Self {
            fetcher,
            lookup_url: lookup_url.to_string(),
            image_base,
        })
    }

    /// The fetcher used for lookups; the download phase shares it.
    pub fn fetcher(&self) -> Arc<dyn Fetcher> {
        Arc::clone(&self.fetcher)
    }

    /// Lookup request URL for an encoded query.
    pub fn lookup_url_for(&self, query: &LookupQuery) -> String {
        self.lookup_url.replace(QUERY_PLACEHOLDER, query.encoded())
    }

    /// All image references on the lookup page, in document order. Empty when none.
    pub fn resolve_all(&self, query: &LookupQuery) -> Result<Vec<ImageReference>, ResolveError> {
        let url = self.lookup_url_for(query);
        tracing::debug!(name = query.name(), %url, "looking up");
        let body = self.fetcher.fetch(&url)?;
        let (markup, charset) = decode_markup(&body);
        let refs: Vec<ImageReference> = extract_image_urls(&markup, &self.image_base, charset)
            .into_iter()
            .map(|url| ImageReference {
                name: query.name().to_string(),
                url,
            })
            .collect();
        tracing::debug!(name = query.name(), count = refs.len(), "lookup parsed");
        Ok(refs)
    }

    /// First image reference in document order, or `NotFound`.
    pub fn resolve_first(&self, query: &LookupQuery) -> Result<ImageReference, ResolveError> {
        self.resolve_all(query)?
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::NotFound {
                name: query.name().to_string(),
            })
    }
}
