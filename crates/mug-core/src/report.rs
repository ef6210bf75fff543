//! Per-name outcome reporting: log lines and an optional JSON file.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::pipeline::{distinct, Outcome};

/// One line of the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeRecord {
    pub name: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl OutcomeRecord {
    pub fn new(name: &str, outcome: &Outcome) -> Self {
        let (path, detail) = match outcome {
            Outcome::Saved(p) => (Some(p.display().to_string()), None),
            Outcome::PlaceholderSkipped | Outcome::NoMatch => (None, None),
            other => (None, Some(other.to_string())),
        };
        Self {
            name: name.to_string(),
            status: outcome.status(),
            path,
            detail,
        }
    }
}

/// Records in `order` (input order), one per name present in `outcomes`.
pub fn records(order: &[String], outcomes: &BTreeMap<String, Outcome>) -> Vec<OutcomeRecord> {
    distinct(order)
        .iter()
        .filter_map(|name| outcomes.get(name).map(|o| OutcomeRecord::new(name, o)))
        .collect()
}

/// Writes `records` as pretty JSON to `path`.
pub fn write_json(path: &Path, records: &[OutcomeRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).with_context(|| format!("failed to write report: {}", path.display()))?;
    Ok(())
}

/// Emits one log line for a name's outcome at a level matching its severity.
pub fn log_outcome(name: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Saved(path) => tracing::info!(name = %name, path = %path.display(), "saved"),
        Outcome::PlaceholderSkipped => tracing::warn!(name = %name, "missing picture"),
        Outcome::NoMatch => tracing::warn!(name = %name, "no match found"),
        Outcome::ResolveFailed(e) => tracing::error!(name = %name, error = %e, "lookup failed"),
        Outcome::DownloadFailed(e) => tracing::error!(name = %name, error = %e, "download failed"),
    }
}

/// Counts per status, e.g. for a closing summary line.
pub fn summarize(outcomes: &BTreeMap<String, Outcome>) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for outcome in outcomes.values() {
        *counts.entry(outcome.status()).or_insert(0) += 1;
    }
    counts
}
