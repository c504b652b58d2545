// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! The flat product record produced for every matched card.

use serde::{Deserialize, Serialize};

/// Placeholder written for any field whose source node or attribute is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// One product listing extracted from a catalog page.
///
/// Every field is always populated; missing source data is stored as
/// [`NOT_AVAILABLE`], never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub vendor: String,
    pub price: String,
    #[serde(rename = "originalPrice")]
    pub original_price: String,
    pub discount: String,
    pub image: String,
    pub link: String,
}

impl ProductRecord {
    /// Column names, in export order.
    pub const HEADERS: [&'static str; 7] = [
        "name",
        "vendor",
        "price",
        "originalPrice",
        "discount",
        "image",
        "link",
    ];

    /// A record with every field set to [`NOT_AVAILABLE`].
    pub fn not_available() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            vendor: NOT_AVAILABLE.to_string(),
            price: NOT_AVAILABLE.to_string(),
            original_price: NOT_AVAILABLE.to_string(),
            discount: NOT_AVAILABLE.to_string(),
            image: NOT_AVAILABLE.to_string(),
            link: NOT_AVAILABLE.to_string(),
        }
    }

    /// Field values in the same order as [`ProductRecord::HEADERS`].
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.name,
            &self.vendor,
            &self.price,
            &self.original_price,
            &self.discount,
            &self.image,
            &self.link,
        ]
    }
}

/// Substitute [`NOT_AVAILABLE`] for a missing value.
pub fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
