//! Liveness and dependency report.
//!
//! The service depends on Postgres, a readable part tree and a writable
//! output directory; `/health` checks each one on every request.

use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when every dependency passes, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// The part tree under `ASSETS_DIR` can be listed.
    pub assets_readable: bool,
    /// A file can be created in `OUTPUT_DIR`.
    pub output_writable: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let assets = state.assets();
    let (db_healthy, assets_readable, output_writable) = tokio::join!(
        async { vikings_db::health_check(&state.pool).await.is_ok() },
        is_readable_dir(&assets.assets_dir),
        is_writable_dir(assets.output_dir.clone()),
    );

    let status = if db_healthy && assets_readable && output_writable {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        assets_readable,
        output_writable,
    })
}

async fn is_readable_dir(dir: &Path) -> bool {
    tokio::fs::read_dir(dir).await.is_ok()
}

/// Creates and immediately drops a temporary file in `dir`.
async fn is_writable_dir(dir: PathBuf) -> bool {
    match tokio::task::spawn_blocking(move || tempfile::tempfile_in(&dir)).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            tracing::debug!(error = %e, "Output directory is not writable");
            false
        }
        Err(_) => false,
    }
}

/// Mount health check routes (root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
