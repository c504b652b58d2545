// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTML → product record extraction.

pub mod format;
pub mod product_card;
pub mod record;

pub use product_card::ProductExtractor;
pub use record::{ProductRecord, NOT_AVAILABLE};
