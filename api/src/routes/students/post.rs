use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use services::student_service::{CreateStudent, StudentService};
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse};
use crate::routes::students::common::{CreateStudentRequest, StudentResponse};

/// POST /api/students
///
/// Registers a student. Admin only. `qr_code` defaults to `student_id`.
///
/// ### Request Body
/// ```json
/// {
///   "student_id": "SV001",
///   "name": "Nguyen Van An",
///   "email": "an@example.edu",
///   "major": "Computer Science",
///   "year": 3
/// }
/// ```
///
/// ### Response: 201 Created
///
/// ### Errors
/// - 400 on validation failure
/// - 409 when the student id or QR code is already taken
pub async fn create_student(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    let student = StudentService::create(
        app_state.db(),
        caller.caller(),
        CreateStudent {
            student_id: req.student_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            major: req.major,
            year: req.year,
            qr_code: req.qr_code,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            StudentResponse::from(student),
            "Student created successfully",
        )),
    ))
}
