// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! CSV encoding of product records.
//!
//! The header row is written explicitly from [`ProductRecord::HEADERS`] so it
//! is present even when there are no records, and columns never depend on
//! struct field order.

use crate::error::ScrapeResult;
use crate::extraction::ProductRecord;

/// Encode records as CSV bytes: one header row, then one row per record.
pub fn encode_products(products: &[ProductRecord]) -> ScrapeResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(ProductRecord::HEADERS)?;
    for product in products {
        writer.write_record(product.fields())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

/// Decode CSV produced by [`encode_products`].
pub fn decode_products(bytes: &[u8]) -> ScrapeResult<Vec<ProductRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let mut products = Vec::new();
    for row in reader.deserialize() {
        products.push(row?);
    }
    Ok(products)
}
