//! CLI for mug: download mugshots for the given names.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use mug_core::config::{self, MugConfig};
use mug_core::fetch::{CurlFetcher, CurlOptions};
use mug_core::pipeline::{Pipeline, PipelineSettings};
use mug_core::report;
use mug_core::resolver::ImageResolver;
use std::path::PathBuf;
use std::sync::Arc;

/// Downloads mugshots of people by name.
#[derive(Debug, Parser)]
#[command(name = "mug")]
#[command(about = "Look names up and download their mugshots", long_about = None)]
pub struct Cli {
    /// Names to look up. Quote names that contain spaces.
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Directory to save images in (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run at most N lookups/downloads at once (default: all names at once).
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Write a JSON report of every name's outcome to this file.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Lookup URL template; `{query}` is replaced by the encoded name.
    #[arg(long, value_name = "TEMPLATE")]
    pub lookup_url: Option<String>,

    /// Base URL that image `src` attributes are resolved against.
    #[arg(long, value_name = "URL")]
    pub image_base_url: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, cfg: &mut MugConfig) {
        if let Some(url) = &self.lookup_url {
            cfg.lookup_url = url.clone();
        }
        if let Some(url) = &self.image_base_url {
            cfg.image_base_url = url.clone();
        }
        if let Some(jobs) = self.jobs {
            cfg.max_in_flight = Some(jobs);
        }
    }

    pub async fn run(self) -> Result<()> {
        if self.names.is_empty() {
            eprintln!("{}", Cli::command().render_usage());
            return Ok(());
        }

        let mut cfg = config::load_or_init()?;
        self.apply_overrides(&mut cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        let output_dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("cannot determine current directory")?,
        };

        let fetcher = Arc::new(CurlFetcher::new(CurlOptions::from(&cfg)));
        let resolver = ImageResolver::new(fetcher, &cfg.lookup_url, &cfg.image_base_url)?;
        let pipeline = Pipeline::new(resolver, PipelineSettings::from_config(&cfg, output_dir));

        let outcomes = pipeline.run(&self.names).await;

        let records = report::records(&self.names, &outcomes);
        for rec in &records {
            if let Some(outcome) = outcomes.get(&rec.name) {
                report::log_outcome(&rec.name, outcome);
            }
        }
        let summary = report::summarize(&outcomes);
        tracing::info!(?summary, "{} name(s) processed", outcomes.len());

        if let Some(path) = &self.report {
            report::write_json(path, &records)?;
            tracing::info!("report written to {}", path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
