//! HTTP API for link resolution.
//!
//! `POST /download` validates a YouTube URL and mode, resolves the direct
//! media link through the configured source, and returns it with the title.
//! `GET /` is a liveness probe.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::core::error::{AppError, AppResult};
use crate::core::validation::validate_youtube_url;
use crate::download::link::resolve_download_link;
use crate::download::options::Mode;
use crate::download::source::DownloadSource;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn DownloadSource>,
}

/// Body of `POST /download`
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    /// "audio" or "video", any case
    pub mode: String,
}

/// Successful `POST /download` response
#[derive(Debug, Clone, Serialize)]
pub struct DownloadResponse {
    pub status: &'static str,
    pub title: String,
    pub download_url: String,
}

/// Builds the router around an extraction source.
pub fn create_router(source: Arc<dyn DownloadSource>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/download", post(download_handler))
        .with_state(AppState { source })
}

/// Start the API server and serve until Ctrl+C.
pub async fn start_web_server(host: &str, port: u16, source: Arc<dyn DownloadSource>) -> anyhow::Result<()> {
    let app = create_router(source);

    let listener = TcpListener::bind((host, port)).await?;
    log::info!("Starting API server on http://{}", listener.local_addr()?);
    log::info!("  GET  /          - Liveness probe");
    log::info!("  POST /download  - Resolve a download link");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    log::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

/// GET /: static status, no computation.
async fn root_handler() -> impl IntoResponse {
    Json(json!({ "status": "API is running" }))
}

/// POST /download: validate, then resolve.
async fn download_handler(
    State(state): State<AppState>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> AppResult<Json<DownloadResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        log::error!("Rejected /download body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })?;

    handle_download(&state, &request).await.map(Json).map_err(|e| {
        log::error!(
            "Download request failed [{}]: {} | url: {} | mode: {}",
            e.category(),
            e,
            request.url,
            request.mode
        );
        e
    })
}

async fn handle_download(state: &AppState, request: &DownloadRequest) -> AppResult<DownloadResponse> {
    let target = validate_youtube_url(&request.url)?;
    let mode = Mode::parse(&request.mode)?;

    let link = resolve_download_link(state.source.as_ref(), &target, mode).await?;

    Ok(DownloadResponse {
        status: "success",
        title: link.title,
        download_url: link.download_url,
    })
}
