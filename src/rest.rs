// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP interface: the upload form, the scrape endpoint and a health check.
//!
//! `POST /scrape` runs one batch per request and answers with the CSV as a
//! file download. Any failure is reported as a generic 500; the cause is
//! only logged.

use crate::acquisition::{HttpClient, PageSource};
use crate::batch::{scrape_to_csv, ScrapeBatch};
use crate::config::ServerConfig;
use crate::error::ScrapeResult;
use crate::export::{TransientArtifact, CSV_CONTENT_TYPE, DOWNLOAD_FILE_NAME};
use crate::extraction::ProductExtractor;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span, Instrument};

/// Body of every failed scrape response.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// State shared by all handlers.
pub struct AppState {
    pub source: Arc<dyn PageSource>,
    pub extractor: ProductExtractor,
    pub artifact_dir: PathBuf,
}

impl AppState {
    /// Build state backed by a real HTTP client.
    pub fn from_config(config: &ServerConfig) -> ScrapeResult<Self> {
        let client = HttpClient::new(&config.user_agent, config.fetch_timeout_ms)?;
        Ok(Self {
            source: Arc::new(client),
            extractor: ProductExtractor::new()?,
            artifact_dir: config.artifact_dir.clone(),
        })
    }
}

/// Build the axum Router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/scrape", post(handle_scrape))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until Ctrl-C.
pub async fn start(config: &ServerConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(config)?);
    let app = router(state);
    let addr = config.listen_addr()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await?;
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────

/// Serve the embedded URL form.
async fn index() -> impl IntoResponse {
    Html(include_str!("index.html"))
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn handle_scrape(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let batch = ScrapeBatch::from_form(&body);
    let request_id = uuid::Uuid::new_v4();
    let span = info_span!("scrape", %request_id, urls = batch.len());

    match run_scrape(&state, &batch).instrument(span.clone()).await {
        Ok(response) => response,
        Err(e) => {
            span.in_scope(|| {
                if e.is_fetch() {
                    error!(category = e.category(), "scrape aborted by fetch error: {e}");
                } else {
                    error!(category = e.category(), "Error processing request: {e}");
                }
            });
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE).into_response()
        }
    }
}

async fn run_scrape(state: &AppState, batch: &ScrapeBatch) -> ScrapeResult<Response> {
    info!("scraping {} urls", batch.len());
    let csv = scrape_to_csv(state.source.as_ref(), &state.extractor, batch).await?;
    let artifact = TransientArtifact::write(&state.artifact_dir, &csv).await?;

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
            (header::CONTENT_LENGTH, csv.len().to_string()),
        ],
        Body::from_stream(artifact.into_stream()),
    )
        .into_response())
}
