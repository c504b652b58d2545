// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the fetch, extract and export stages.

/// All errors that can abort a scrape batch.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// Transport failure, invalid URL, timeout or non-2xx status.
    #[error("Fetch error for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup error: {0}")]
    Client(#[source] reqwest::Error),

    /// A card selector failed to compile.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] csv::Error),

    /// Writing or reading the transient artifact failed.
    #[error("Artifact I/O error: {0}")]
    Artifact(#[from] std::io::Error),
}

impl ScrapeError {
    /// Coarse category used as a structured log field.
    pub fn category(&self) -> &'static str {
        match self {
            ScrapeError::Fetch { .. } => "fetch",
            ScrapeError::Client(_) => "client",
            ScrapeError::Parse(_) => "parse",
            ScrapeError::Encoding(_) | ScrapeError::Artifact(_) => "encoding",
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, ScrapeError::Fetch { .. })
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(ScrapeError::Parse("bad".into()).category(), "parse");
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = ScrapeError::from(io);
        assert_eq!(err.category(), "encoding");
        assert!(!err.is_fetch());
        assert!(err.to_string().contains("disk full"));
    }
}
