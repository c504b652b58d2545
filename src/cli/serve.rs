// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Start the HTTP server.

use crate::config::{ConfigOverrides, ServerConfig};
use crate::rest;
use anyhow::{Context, Result};
use tracing::info;

pub async fn run(overrides: ConfigOverrides) -> Result<()> {
    let config = ServerConfig::resolve(overrides).context("failed to resolve configuration")?;

    std::fs::create_dir_all(&config.artifact_dir).with_context(|| {
        format!(
            "failed to create artifact directory {}",
            config.artifact_dir.display()
        )
    })?;

    info!(
        "starting catalog-scraper v{} (artifacts in {})",
        env!("CARGO_PKG_VERSION"),
        config.artifact_dir.display()
    );

    rest::start(&config).await
}
