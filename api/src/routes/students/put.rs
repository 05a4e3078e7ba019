use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::student_service::{StudentService, UpdateStudent};
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse, Empty};
use crate::routes::students::common::UpdateStudentRequest;

/// PUT /api/students/{student_id}
///
/// Partial update. The QR code cannot be changed here.
pub async fn update_student(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Path(student_id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    StudentService::update(
        app_state.db(),
        caller.caller(),
        student_id,
        UpdateStudent {
            student_id: req.student_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            major: req.major,
            year: req.year,
        },
    )
    .await?;

    Ok(Json(ApiResponse::success(Empty::default(), "Student updated successfully")))
}
