use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::booth_service::BoothService;
use util::state::AppState;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse, Empty};
use crate::routes::booths::common::BoothResponse;

/// GET /api/booths
///
/// Lists every booth in id order. Public. An unreachable store yields an empty list.
pub async fn list_booths(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let booths = BoothService::list(app_state.db()).await?;
    let data: Vec<BoothResponse> = booths.into_iter().map(BoothResponse::from).collect();

    Ok(Json(ApiResponse::success(data, "Booths retrieved successfully")))
}

/// GET /api/booths/{booth_id}
///
/// ### Errors
/// - 404 when no booth has this id
pub async fn get_booth(
    State(app_state): State<AppState>,
    Path(booth_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let response = match BoothService::get_by_id(app_state.db(), booth_id).await? {
        Some(booth) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                BoothResponse::from(booth),
                "Booth retrieved successfully",
            )),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Booth not found")),
        )
            .into_response(),
    };

    Ok(response)
}

/// GET /api/booths/mine
///
/// Booths whose `admin_id` is the caller.
pub async fn my_booths(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
) -> Result<impl IntoResponse, ApiError> {
    let booths = BoothService::my_booths(app_state.db(), caller.caller()).await?;
    let data: Vec<BoothResponse> = booths.into_iter().map(BoothResponse::from).collect();

    Ok(Json(ApiResponse::success(data, "Booths retrieved successfully")))
}
