use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use services::booth_service::{BoothService, CreateBooth};
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse};
use crate::routes::booths::common::{BoothResponse, CreateBoothRequest};

/// POST /api/booths
///
/// Creates a booth. Admin only. New booths start active.
///
/// ### Request Body
/// ```json
/// {
///   "name": "IT Booth",
///   "description": "Software engineering demos",
///   "location": "Hall A",
///   "admin_id": 3
/// }
/// ```
///
/// ### Response: 201 Created
///
/// ### Errors
/// - 400 on validation failure
/// - 403 for non-admin callers
pub async fn create_booth(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Json(req): Json<CreateBoothRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    let booth = BoothService::create(
        app_state.db(),
        caller.caller(),
        CreateBooth {
            name: req.name,
            description: req.description,
            location: req.location,
            admin_id: req.admin_id,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            BoothResponse::from(booth),
            "Booth created successfully",
        )),
    ))
}
