// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Field normalizers applied after the `N/A` substitution.

use super::record::NOT_AVAILABLE;

/// Keep only ASCII digits and dots. An empty result becomes `N/A`.
///
/// `"Rs. 1,299.00"` becomes `".1299.00"`; the leading dot from `Rs.` is kept.
pub fn format_price(raw: &str) -> String {
    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if numeric.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        numeric
    }
}

/// Rewrite a protocol-relative URL (`//host/path`) to `https://host/path`.
pub fn format_image_url(url: &str) -> String {
    match url.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}
