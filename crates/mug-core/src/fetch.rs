//! HTTP GET transport.
//!
//! The pipeline only sees the [`Fetcher`] trait; [`CurlFetcher`] is the libcurl
//! implementation used by the CLI. Transfers are blocking, so async callers run
//! them inside `spawn_blocking`.

use std::time::Duration;
use thiserror::Error;

use crate::config::MugConfig;

/// Why a GET produced no body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("GET {url} failed: {reason}")]
    Transport { url: String, reason: String },
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Remote { url: String, status: u32 },
}

/// Blocking `fetch(url) -> bytes` capability shared by every pipeline task.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Per-request curl settings.
#[derive(Debug, Clone)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
            user_agent: None,
        }
    }
}

impl From<&MugConfig> for CurlOptions {
    fn from(cfg: &MugConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// [`Fetcher`] backed by a fresh `curl::easy::Easy` handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: CurlOptions,
}

impl CurlFetcher {
    pub fn new(options: CurlOptions) -> Self {
        Self { options }
    }

    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        if let Some(ua) = &self.options.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let (code, body) = self.get(url).map_err(|e| FetchError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Remote {
                url: url.to_string(),
                status: code,
            });
        }
        tracing::trace!(url, bytes = body.len(), "GET complete");
        Ok(body)
    }
}
