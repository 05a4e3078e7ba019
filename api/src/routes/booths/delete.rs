use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::booth_service::BoothService;
use util::state::AppState;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse, Empty};

/// DELETE /api/booths/{booth_id}
///
/// ### Errors
/// - 404 when the booth does not exist
/// - 409 while attendance is recorded against the booth
pub async fn delete_booth(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Path(booth_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    BoothService::delete(app_state.db(), caller.caller(), booth_id).await?;

    Ok(Json(ApiResponse::success(Empty::default(), "Booth deleted successfully")))
}
