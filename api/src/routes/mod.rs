//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness and storage probe (public)
//! - `/auth` → current identity
//! - `/booths` → booth catalogue and admin management
//! - `/students` → student registry, QR lookup
//! - `/attendance` → scanning and attendance reports
//!
//! Every route carries its own guard keyed by the matching
//! [`services::Operation`], so the HTTP layer enforces the same table as the
//! services.

use axum::Router;
use util::state::AppState;

use crate::routes::{
    attendance::attendance_routes, auth::auth_routes, booths::booth_routes,
    health::health_routes, students::student_routes,
};

pub mod attendance;
pub mod auth;
pub mod booths;
pub mod health;
pub mod students;

/// Builds the router for everything under `/api`, bound to `app_state`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/booths", booth_routes())
        .nest("/students", student_routes())
        .nest("/attendance", attendance_routes())
        .with_state(app_state)
}
