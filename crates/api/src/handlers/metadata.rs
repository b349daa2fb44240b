//! OpenSea-compatible metadata documents.
//!
//! Served without the `{ "data": ... }` envelope: marketplaces fetch the
//! token URI and expect the metadata object at the top level.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use vikings_core::metadata::to_broadcast;
use vikings_core::types::VikingNumber;

use crate::error::AppResult;
use crate::handlers::find_viking;
use crate::state::AppState;

/// GET /api/v1/metadata/{number}
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(number): Path<VikingNumber>,
) -> AppResult<impl IntoResponse> {
    let viking = find_viking(&state, number).await?;
    Ok(Json(to_broadcast(&viking.to_record())))
}
