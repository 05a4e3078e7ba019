use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student::Model as StudentModel;
use services::student_service::StudentService;
use util::state::AppState;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse, Empty};
use crate::routes::students::common::StudentResponse;

fn found_or_404(student: Option<StudentModel>) -> Response {
    match student {
        Some(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student retrieved successfully",
            )),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Student not found")),
        )
            .into_response(),
    }
}

/// GET /api/students
///
/// Lists every student. Admin only.
pub async fn list_students(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
) -> Result<impl IntoResponse, ApiError> {
    let students = StudentService::list(app_state.db(), caller.caller()).await?;
    let data: Vec<StudentResponse> = students.into_iter().map(StudentResponse::from).collect();

    Ok(Json(ApiResponse::success(data, "Students retrieved successfully")))
}

/// GET /api/students/{student_id}
///
/// `student_id` is the surrogate id.
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let student = StudentService::get_by_id(app_state.db(), student_id).await?;
    Ok(found_or_404(student))
}

/// GET /api/students/qr/{qr_code}
///
/// Resolves a scanned QR payload to its student, without recording anything.
pub async fn get_student_by_qr_code(
    State(app_state): State<AppState>,
    Path(qr_code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let student = StudentService::get_by_qr_code(app_state.db(), &qr_code).await?;
    Ok(found_or_404(student))
}
