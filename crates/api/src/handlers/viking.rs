//! Handlers for minted Vikings.
//!
//! Minting runs the full generation pipeline inside the request; the
//! request timeout layer bounds how long a slow composite can hold it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vikings_core::error::CoreError;
use vikings_core::input::RawTraitInput;
use vikings_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use vikings_core::specification::build_specification;
use vikings_core::types::VikingNumber;
use vikings_db::repositories::VikingRepo;
use vikings_events::{DeletedViking, VikingEvent};

use crate::error::{AppError, AppResult};
use crate::handlers::find_viking;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/vikings`.
#[derive(Debug, Deserialize)]
pub struct CreateVikingRequest {
    pub number: VikingNumber,
    pub input: RawTraitInput,
}

/// GET /api/v1/vikings
///
/// List stored Vikings ordered by number.
pub async fn list_vikings(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);

    let vikings = VikingRepo::list(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse { data: vikings }))
}

/// POST /api/v1/vikings
///
/// Mint a Viking from raw trait data: derive, composite, store.
pub async fn create_viking(
    State(state): State<AppState>,
    Json(input): Json<CreateVikingRequest>,
) -> AppResult<impl IntoResponse> {
    if input.number < 0 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Viking number must be non-negative, got {}",
            input.number
        ))));
    }

    let record = state.pipeline.generate(input.number, input.input).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/vikings/{number}
pub async fn get_viking(
    State(state): State<AppState>,
    Path(number): Path<VikingNumber>,
) -> AppResult<impl IntoResponse> {
    let viking = find_viking(&state, number).await?;
    Ok(Json(viking))
}

/// GET /api/v1/vikings/{number}/specification
///
/// Rebuild the asset specification from the raw input stored with the
/// record. Derivation is deterministic, so this matches what was
/// composited at mint time.
pub async fn get_specification(
    State(state): State<AppState>,
    Path(number): Path<VikingNumber>,
) -> AppResult<impl IntoResponse> {
    let viking = find_viking(&state, number).await?;
    let spec = build_specification(state.assets(), number, &viking.raw_input.0)?;
    Ok(Json(spec))
}

/// DELETE /api/v1/vikings/{number}
///
/// Administrative removal of a record and its composited image.
pub async fn delete_viking(
    State(state): State<AppState>,
    Path(number): Path<VikingNumber>,
) -> AppResult<impl IntoResponse> {
    let deleted = VikingRepo::delete_by_number(&state.pool, number).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Viking",
            number,
        }));
    }

    let image = state.assets().output_path(number);
    match tokio::fs::remove_file(&image).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(
                number,
                path = %image.display(),
                error = %e,
                "Failed to remove Viking image"
            );
        }
    }

    state
        .event_bus
        .publish(VikingEvent::Deleted(DeletedViking { number }));

    tracing::info!(number, "Viking deleted");

    Ok(StatusCode::NO_CONTENT)
}
