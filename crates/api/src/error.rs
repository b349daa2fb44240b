use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vikings_core::error::CoreError;
use vikings_pipeline::GenerationError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`], [`GenerationError`] and sqlx errors. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vikings_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed generation from `vikings_pipeline`.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

type Classified = (StatusCode, &'static str, String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Generation(err) => classify_generation_error(err),
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> Classified {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn classify_core_error(err: &CoreError) -> Classified {
    match err {
        CoreError::NotFound { entity, number } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} {number} not found"),
        ),
        CoreError::MalformedInput { .. } => {
            (StatusCode::BAD_REQUEST, "MALFORMED_INPUT", err.to_string())
        }
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
    }
}

/// Missing assets and compositing failures are operator problems; the
/// response carries no file system paths.
fn classify_generation_error(err: &GenerationError) -> Classified {
    match err {
        GenerationError::Malformed(core) => classify_core_error(core),
        GenerationError::Duplicate { number } => (
            StatusCode::CONFLICT,
            "CONFLICT",
            format!("Viking {number} already exists"),
        ),
        GenerationError::MissingAsset { number, missing } => {
            for (slot, path) in missing {
                tracing::error!(
                    number,
                    slot = slot.key(),
                    path = %path.display(),
                    "Missing asset"
                );
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ASSET_MISSING",
                format!("Viking {number} could not be generated: asset files are missing"),
            )
        }
        GenerationError::Composite { number, message } => {
            tracing::error!(number, error = %message, "Compositing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMPOSITE_FAILED",
                format!("Viking {number} could not be generated"),
            )
        }
        GenerationError::Store { number, message } => {
            tracing::error!(number, error = %message, "Store error");
            internal()
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> Classified {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
