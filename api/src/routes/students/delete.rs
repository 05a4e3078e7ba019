use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::student_service::StudentService;
use util::state::AppState;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse, Empty};

/// DELETE /api/students/{student_id}
///
/// ### Errors
/// - 404 when the student does not exist
/// - 409 while the student has recorded attendance
pub async fn delete_student(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Path(student_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    StudentService::delete(app_state.db(), caller.caller(), student_id).await?;

    Ok(Json(ApiResponse::success(Empty::default(), "Student deleted successfully")))
}
