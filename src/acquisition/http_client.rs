// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Async HTTP client wrapping reqwest.
//!
//! One GET per URL. No retries and no backoff: a failed request fails the
//! whole batch.

use super::PageSource;
use crate::error::{ScrapeError, ScrapeResult};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Default desktop user-agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

/// HTTP client used to download catalog pages.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client. `timeout_ms = None` keeps reqwest's default (no timeout).
    pub fn new(user_agent: &str, timeout_ms: Option<u64>) -> ScrapeResult<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent);

        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        let client = builder.build().map_err(ScrapeError::Client)?;

        Ok(Self { client })
    }

    /// GET `url` and return the body text. Non-2xx statuses are errors.
    pub async fn get(&self, url: &str) -> ScrapeResult<String> {
        let fetch_err = |source: reqwest::Error| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url).send().await.map_err(fetch_err)?;
        let status = resp.status();
        if !status.is_success() {
            warn!("GET {url} returned {status}");
        }
        let resp = resp.error_for_status().map_err(fetch_err)?;
        let body = resp.text().await.map_err(fetch_err)?;

        debug!("GET {url} -> {status} ({} bytes)", body.len());
        Ok(body)
    }
}

#[async_trait]
impl PageSource for HttpClient {
    async fn fetch(&self, url: &str) -> ScrapeResult<String> {
        self.get(url).await
    }
}
