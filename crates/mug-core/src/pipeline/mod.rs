//! Resolve-then-download pipeline.
//!
//! Two phases separated by a barrier:
//! 1. every name is encoded and looked up concurrently;
//! 2. once all lookups are done, every resolved image is fetched concurrently,
//!    checked against the placeholder and written to disk.
//!
//! Each name ends in exactly one [`Outcome`]; one name's failure never blocks
//! or cancels another.

mod fan_out;
mod outcome;

pub use outcome::{DownloadError, Outcome};

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use crate::config::MugConfig;
use crate::fetch::Fetcher;
use crate::placeholder::is_placeholder;
use crate::query::encode;
use crate::resolver::{ImageReference, ImageResolver, ResolveError};
use crate::storage::{image_path, write_atomic};

/// Where and how images are saved.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub output_dir: PathBuf,
    /// Extension without the dot.
    pub extension: String,
    /// Tasks in flight per phase; `None` runs one task per name at once.
    pub max_in_flight: Option<usize>,
}

impl PipelineSettings {
    pub fn from_config(cfg: &MugConfig, output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            extension: cfg.extension.clone(),
            max_in_flight: cfg.max_in_flight,
        }
    }
}

/// Name → file pipeline over a shared resolver and fetcher.
pub struct Pipeline {
    resolver: ImageResolver,
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(resolver: ImageResolver, settings: PipelineSettings) -> Self {
        Self { resolver, settings }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Processes `names` and returns one outcome per distinct name.
    ///
    /// Returns only after every name has reached a terminal outcome.
    pub async fn run(&self, names: &[String]) -> BTreeMap<String, Outcome> {
        let names = distinct(names);
        let mut outcomes = BTreeMap::new();

        let resolved = self.resolve_phase(&names, &mut outcomes).await;
        tracing::debug!(
            resolved = resolved.len(),
            finished = outcomes.len(),
            "resolution phase complete"
        );

        self.download_phase(resolved, &mut outcomes).await;
        outcomes
    }

    /// Encodes and looks up every name. Names that fail or have no match get
    /// their outcome here; the rest are returned for download.
    async fn resolve_phase(
        &self,
        names: &[String],
        outcomes: &mut BTreeMap<String, Outcome>,
    ) -> Vec<ImageReference> {
        let resolver = self.resolver.clone();
        let results = fan_out::run_all(
            names.to_vec(),
            self.limit(names.len()),
            |name| name.clone(),
            move |name: String| -> Result<ImageReference, ResolveError> {
                let query = encode(&name)?;
                resolver.resolve_first(&query)
            },
            |name, reason| {
                Err(ResolveError::Task {
                    name: name.to_string(),
                    reason,
                })
            },
        )
        .await;

        let mut resolved = Vec::with_capacity(results.len());
        for (name, result) in results {
            match result {
                Ok(reference) => {
                    tracing::debug!(name = %name, url = %reference.url, "resolved");
                    resolved.push(reference);
                }
                Err(err) => {
                    outcomes.insert(name, Outcome::from(err));
                }
            }
        }
        resolved
    }

    /// Fetches, filters and saves every resolved image.
    async fn download_phase(
        &self,
        resolved: Vec<ImageReference>,
        outcomes: &mut BTreeMap<String, Outcome>,
    ) {
        let fetcher = self.resolver.fetcher();
        let output_dir = self.settings.output_dir.clone();
        let extension = self.settings.extension.clone();
        let limit = self.limit(resolved.len());

        let results = fan_out::run_all(
            resolved,
            limit,
            |reference| reference.name.clone(),
            move |reference: ImageReference| {
                let path = image_path(&output_dir, &reference.name, &extension);
                download_one(fetcher.as_ref(), &reference, &path)
            },
            |name, reason| {
                Outcome::DownloadFailed(DownloadError::Task {
                    name: name.to_string(),
                    reason,
                })
            },
        )
        .await;

        for (name, outcome) in results {
            outcomes.insert(name, outcome);
        }
    }

    fn limit(&self, batch: usize) -> usize {
        self.settings.max_in_flight.unwrap_or(batch).max(1)
    }
}

/// Fetches one image and saves it unless it is the placeholder.
pub fn download_one(fetcher: &dyn Fetcher, reference: &ImageReference, path: &Path) -> Outcome {
    let bytes = match fetcher.fetch(reference.url.as_str()) {
        Ok(b) => b,
        Err(e) => return Outcome::DownloadFailed(DownloadError::Fetch(e)),
    };
    if is_placeholder(&bytes) {
        tracing::debug!(name = %reference.name, "placeholder image");
        return Outcome::PlaceholderSkipped;
    }
    match write_atomic(path, &bytes) {
        Ok(()) => {
            tracing::debug!(name = %reference.name, path = %path.display(), bytes = bytes.len(), "saved");
            Outcome::Saved(path.to_path_buf())
        }
        Err(source) => Outcome::DownloadFailed(DownloadError::Filesystem {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Drops repeated names, keeping first-occurrence order.
pub fn distinct(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .iter()
        .filter(|n| seen.insert(n.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests;
