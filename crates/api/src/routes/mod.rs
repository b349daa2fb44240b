pub mod health;
pub mod metadata;
pub mod viking;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vikings                                         list, mint (GET, POST)
/// /vikings/{number}                                get, delete (admin)
/// /vikings/{number}/specification                  re-derived asset specification
///
/// /metadata/{number}                               OpenSea metadata document
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/vikings", viking::router())
        .nest("/metadata", metadata::router())
}
