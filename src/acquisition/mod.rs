// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Page acquisition: turn a URL into raw HTML text.

pub mod http_client;

pub use http_client::HttpClient;

use crate::error::ScrapeResult;
use async_trait::async_trait;

/// Anything that can produce the HTML body for a URL.
///
/// The batch runner only depends on this trait, so callers can swap the
/// network client for canned pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of `url` as text.
    async fn fetch(&self, url: &str) -> ScrapeResult<String>;
}
