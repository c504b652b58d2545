// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-request transient CSV file.
//!
//! Each request writes its export to `products-<uuid>.csv`, so concurrent
//! downloads never share a file. The file is removed when the
//! [`TransientArtifact`] is dropped: after the body has been streamed, when
//! the client disconnects mid-download, or when writing fails.

use crate::error::ScrapeResult;
use axum::body::Bytes;
use futures::Stream;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, warn};

/// Read size used when streaming the artifact back out.
const CHUNK_SIZE: usize = 16 * 1024;

/// A CSV export on disk that deletes itself on drop.
#[derive(Debug)]
pub struct TransientArtifact {
    path: PathBuf,
    written: bool,
    delivered: bool,
}

impl TransientArtifact {
    /// Write `bytes` to a fresh uniquely named file inside `dir`.
    pub async fn write(dir: &Path, bytes: &[u8]) -> ScrapeResult<Self> {
        let name = format!("products-{}.csv", uuid::Uuid::new_v4());
        // Drop also removes a partially written file.
        let mut artifact = Self {
            path: dir.join(name),
            written: false,
            delivered: false,
        };

        let mut file = tokio::fs::File::create(&artifact.path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        artifact.written = true;

        debug!(
            "wrote {} bytes to {}",
            bytes.len(),
            artifact.path.display()
        );
        Ok(artifact)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when a complete file was written but never fully streamed.
    fn abandoned(&self) -> bool {
        self.written && !self.delivered
    }

    /// Stream the file contents. The file is deleted once the stream has
    /// been read to the end or dropped.
    pub fn into_stream(self) -> impl Stream<Item = std::io::Result<Bytes>> + Send + 'static {
        let mut artifact = self;
        async_stream::try_stream! {
            let mut file = tokio::fs::File::open(&artifact.path).await?;
            let mut buf = vec![0u8; CHUNK_SIZE];
            loop {
                let n = file.read(&mut buf).await?;
                if n == 0 {
                    break;
                }
                yield Bytes::copy_from_slice(&buf[..n]);
            }
            drop(file);
            artifact.delivered = true;
            drop(artifact);
        }
    }
}

impl Drop for TransientArtifact {
    fn drop(&mut self) {
        if self.abandoned() {
            warn!(
                "download of {} did not complete; discarding",
                self.path.display()
            );
        }
        // Blocking removal on the runtime thread; artifacts are small.
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("removed {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("failed to remove {}: {e}", self.path.display()),
        }
    }
}
