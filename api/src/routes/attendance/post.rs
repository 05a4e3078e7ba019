use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use services::attendance_service::AttendanceService;
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse};
use crate::routes::attendance::common::{ScanRequest, ScanResponse};

/// POST /api/attendance/scan
///
/// Records that the student behind `qr_code` visited `booth_id`. Each student
/// is recorded at most once per booth.
///
/// ### Request Body
/// ```json
/// { "qr_code": "SV001", "booth_id": 2 }
/// ```
///
/// ### Response: 201 Created
/// ```json
/// {
///   "success": true,
///   "data": {
///     "attendance_id": 17,
///     "booth_id": 2,
///     "scanned_at": "2025-10-14T09:30:00+00:00",
///     "scanned_by": 5,
///     "student": { "id": 1, "student_id": "SV001", "name": "Nguyen Van An", ... }
///   },
///   "message": "Attendance recorded"
/// }
/// ```
///
/// ### Errors
/// - 401 without a valid token
/// - 404 when the QR code or booth is unknown
/// - 409 when the student already attended this booth
pub async fn scan(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
    Json(req): Json<ScanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    let outcome =
        AttendanceService::scan(app_state.db(), caller.caller(), &req.qr_code, req.booth_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ScanResponse::from(outcome), "Attendance recorded")),
    ))
}
