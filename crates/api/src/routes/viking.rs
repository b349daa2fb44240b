//! Route definitions for minted Vikings.

use axum::routing::get;
use axum::Router;

use crate::handlers::viking;
use crate::state::AppState;

/// Viking routes mounted at `/vikings`.
///
/// ```text
/// GET    /                          -> list_vikings
/// POST   /                          -> create_viking
/// GET    /{number}                  -> get_viking
/// DELETE /{number}                  -> delete_viking
/// GET    /{number}/specification    -> get_specification
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(viking::list_vikings).post(viking::create_viking))
        .route(
            "/{number}",
            get(viking::get_viking).delete(viking::delete_viking),
        )
        .route("/{number}/specification", get(viking::get_specification))
}
