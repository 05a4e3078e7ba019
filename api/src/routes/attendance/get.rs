use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::attendance_service::AttendanceService;
use util::state::AppState;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse};
use crate::routes::attendance::common::{BoothVisitResponse, StudentVisitResponse};

/// GET /api/attendance/booths/{booth_id}
///
/// Visits at a booth, oldest scan first. `student` is `null` for a visit whose
/// student row no longer exists.
pub async fn attendance_by_booth(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Path(booth_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = AttendanceService::by_booth(app_state.db(), caller.caller(), booth_id).await?;
    let data: Vec<BoothVisitResponse> = rows.into_iter().map(BoothVisitResponse::from).collect();

    Ok(Json(ApiResponse::success(data, "Attendance retrieved successfully")))
}

/// GET /api/attendance/students/{student_id}
///
/// The booths a student visited, oldest scan first.
pub async fn attendance_by_student(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Path(student_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = AttendanceService::by_student(app_state.db(), caller.caller(), student_id).await?;
    let data: Vec<StudentVisitResponse> =
        rows.into_iter().map(StudentVisitResponse::from).collect();

    Ok(Json(ApiResponse::success(data, "Attendance retrieved successfully")))
}
