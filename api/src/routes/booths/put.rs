use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::booth_service::{BoothService, UpdateBooth};
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse, Empty};
use crate::routes::booths::common::UpdateBoothRequest;

/// PUT /api/booths/{booth_id}
///
/// Applies a partial update. Omitted fields are left unchanged. Admin only.
///
/// ### Errors
/// - 400 on validation failure
/// - 404 when the booth does not exist
pub async fn update_booth(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Path(booth_id): Path<i64>,
    Json(req): Json<UpdateBoothRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    BoothService::update(
        app_state.db(),
        caller.caller(),
        booth_id,
        UpdateBooth {
            name: req.name,
            description: req.description,
            location: req.location,
            admin_id: req.admin_id,
            is_active: req.is_active,
        },
    )
    .await?;

    Ok(Json(ApiResponse::success(Empty::default(), "Booth updated successfully")))
}
