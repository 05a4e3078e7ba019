//! # Attendance Routes Module
//!
//! Routes for the `/api/attendance` endpoint group. All of them require an
//! authenticated caller.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use services::Operation;
use util::state::AppState;

use crate::auth::guards::authorize;
use get::{attendance_by_booth, attendance_by_student};
use post::scan;

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/attendance` route group.
///
/// - `POST /attendance/scan` → `scan`
/// - `GET /attendance/booths/{booth_id}` → `attendance_by_booth`
/// - `GET /attendance/students/{student_id}` → `attendance_by_student`
pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/scan",
            post(scan).route_layer(from_fn_with_state(Operation::ScanAttendance, authorize)),
        )
        .route(
            "/booths/{booth_id}",
            get(attendance_by_booth)
                .route_layer(from_fn_with_state(Operation::AttendanceByBooth, authorize)),
        )
        .route(
            "/students/{student_id}",
            get(attendance_by_student)
                .route_layer(from_fn_with_state(Operation::AttendanceByStudent, authorize)),
        )
}
