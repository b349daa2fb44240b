pub mod metadata;
pub mod viking;

use vikings_core::error::CoreError;
use vikings_core::types::VikingNumber;
use vikings_db::models::viking::Viking;
use vikings_db::repositories::VikingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Load a stored Viking or fail with 404.
pub(crate) async fn find_viking(state: &AppState, number: VikingNumber) -> AppResult<Viking> {
    VikingRepo::find_by_number(&state.pool, number)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Viking",
            number,
        }))
}
