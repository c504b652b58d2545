// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! One-shot scrape from the command line.

use crate::acquisition::HttpClient;
use crate::batch::{scrape_to_csv, ScrapeBatch};
use crate::config::{ConfigOverrides, FetchConfig};
use crate::extraction::ProductExtractor;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Scrape `urls` and write the CSV to `output`, or stdout when `None`.
pub async fn run(urls: &[String], output: Option<&Path>, overrides: ConfigOverrides) -> Result<()> {
    let config = FetchConfig::resolve(&overrides).context("failed to resolve configuration")?;
    let client = HttpClient::new(&config.user_agent, config.fetch_timeout_ms)?;
    let extractor = ProductExtractor::new()?;
    let batch = ScrapeBatch::new(urls);

    let csv = scrape_to_csv(&client, &extractor, &batch)
        .await
        .context("scrape failed")?;

    match output {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} bytes to {}", csv.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&csv)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
