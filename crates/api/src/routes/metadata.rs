use axum::routing::get;
use axum::Router;

use crate::handlers::metadata;
use crate::state::AppState;

/// Marketplace metadata mounted at `/metadata`.
///
/// ```text
/// GET    /{number}                  -> get_metadata
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{number}", get(metadata::get_metadata))
}
