// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Batch orchestration: fetch and extract each URL in order, then encode.
//!
//! URLs are processed strictly one after another. The first failure aborts
//! the batch and no partial output is produced.

use crate::acquisition::PageSource;
use crate::error::ScrapeResult;
use crate::export::encode_products;
use crate::extraction::{ProductExtractor, ProductRecord};
use tracing::info;

/// Ordered list of URLs submitted together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeBatch {
    urls: Vec<String>,
}

impl ScrapeBatch {
    /// Build a batch, dropping blank entries and trimming the rest.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls = urls
            .into_iter()
            .map(|u| u.as_ref().trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();
        Self { urls }
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// Accepts `urls=a&urls=b` as well as the bracketed `urls[]=a` and
    /// `urls[0]=a` forms, in body order.
    pub fn from_form(body: &[u8]) -> Self {
        Self::new(
            url::form_urlencoded::parse(body)
                .filter(|(key, _)| is_urls_key(key))
                .map(|(_, value)| value.into_owned()),
        )
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

fn is_urls_key(key: &str) -> bool {
    match key.strip_prefix("urls") {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .is_some_and(|idx| idx.chars().all(|c| c.is_ascii_digit())),
        None => false,
    }
}

/// Fetch and extract every URL in `batch`, preserving (URL, in-page) order.
pub async fn collect_products(
    source: &dyn PageSource,
    extractor: &ProductExtractor,
    batch: &ScrapeBatch,
) -> ScrapeResult<Vec<ProductRecord>> {
    let mut products = Vec::new();

    for url in batch.urls() {
        let html = source.fetch(url).await?;
        let page_products = extractor.extract(&html);
        info!("{url}: {} products", page_products.len());
        products.extend(page_products);
    }

    Ok(products)
}

/// Run the batch and encode the result as CSV bytes.
pub async fn scrape_to_csv(
    source: &dyn PageSource,
    extractor: &ProductExtractor,
    batch: &ScrapeBatch,
) -> ScrapeResult<Vec<u8>> {
    let products = collect_products(source, extractor, batch).await?;
    info!(
        "batch complete: {} urls, {} products",
        batch.len(),
        products.len()
    );
    encode_products(&products)
}
