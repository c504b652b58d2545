// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Catalog scraper library: fetch catalog pages, extract product cards,
//! export them as CSV.
//!
//! The binary wires these modules into an HTTP server and a one-shot CLI;
//! the library crate exposes them for integration testing.

pub mod acquisition;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod rest;

pub use error::{ScrapeError, ScrapeResult};
