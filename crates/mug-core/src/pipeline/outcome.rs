//! Terminal per-name outcomes.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fetch::FetchError;
use crate::resolver::ResolveError;

/// Why a resolved image was not saved.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("image download failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("download task for {name:?} did not finish: {reason}")]
    Task { name: String, reason: String },
}

/// Final classification of one name. Exactly one per distinct input name.
#[derive(Debug)]
pub enum Outcome {
    /// Image written to this path.
    Saved(PathBuf),
    /// The image host returned its "no photo" placeholder.
    PlaceholderSkipped,
    /// Lookup succeeded but the page had no image.
    NoMatch,
    /// Encoding, transport or remote failure before an image URL was known.
    ResolveFailed(ResolveError),
    /// Image fetch or write failed.
    DownloadFailed(DownloadError),
}

impl Outcome {
    /// Short machine-readable status, used in reports.
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Saved(_) => "saved",
            Outcome::PlaceholderSkipped => "placeholder",
            Outcome::NoMatch => "no_match",
            Outcome::ResolveFailed(_) => "resolve_failed",
            Outcome::DownloadFailed(_) => "download_failed",
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::ResolveFailed(_) | Outcome::DownloadFailed(_))
    }
}

impl From<ResolveError> for Outcome {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound { .. } => Outcome::NoMatch,
            other => Outcome::ResolveFailed(other),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Saved(path) => write!(f, "saved to {}", path.display()),
            Outcome::PlaceholderSkipped => write!(f, "missing picture"),
            Outcome::NoMatch => write!(f, "no match found"),
            Outcome::ResolveFailed(e) => write!(f, "{}", e),
            Outcome::DownloadFailed(e) => write!(f, "{}", e),
        }
    }
}
