// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! CSV export and per-request file delivery.

pub mod artifact;
pub mod table;

pub use artifact::TransientArtifact;
pub use table::{decode_products, encode_products};

/// File name offered to the browser in `Content-Disposition`.
pub const DOWNLOAD_FILE_NAME: &str = "products.csv";

/// MIME type of the export.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
