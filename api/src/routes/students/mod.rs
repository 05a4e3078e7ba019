//! # Student Routes Module
//!
//! Routes for the `/api/students` endpoint group.
//!
//! ## Structure
//! - `get.rs`: list, fetch by id, fetch by QR payload
//! - `post.rs`: create
//! - `put.rs`: update
//! - `delete.rs`: delete

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use services::Operation;
use util::state::AppState;

use crate::auth::guards::authorize;
use delete::delete_student;
use get::{get_student, get_student_by_qr_code, list_students};
use post::create_student;
use put::update_student;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/students` route group.
///
/// - `GET /students` → `list_students` (admin)
/// - `POST /students` → `create_student` (admin)
/// - `GET /students/qr/{qr_code}` → `get_student_by_qr_code` (public)
/// - `GET /students/{student_id}` → `get_student` (public)
/// - `PUT /students/{student_id}` → `update_student` (admin)
/// - `DELETE /students/{student_id}` → `delete_student` (admin)
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_students).route_layer(from_fn_with_state(Operation::ListStudents, authorize)),
        )
        .route(
            "/",
            post(create_student)
                .route_layer(from_fn_with_state(Operation::CreateStudent, authorize)),
        )
        .route(
            "/qr/{qr_code}",
            get(get_student_by_qr_code)
                .route_layer(from_fn_with_state(Operation::GetStudentByQrCode, authorize)),
        )
        .route(
            "/{student_id}",
            get(get_student).route_layer(from_fn_with_state(Operation::GetStudent, authorize)),
        )
        .route(
            "/{student_id}",
            put(update_student)
                .route_layer(from_fn_with_state(Operation::UpdateStudent, authorize)),
        )
        .route(
            "/{student_id}",
            delete(delete_student)
                .route_layer(from_fn_with_state(Operation::DeleteStudent, authorize)),
        )
}
