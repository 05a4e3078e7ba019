use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde::Serialize;
use util::state::AppState;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Builds the `/health` route group.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Always `200 OK` while the process is serving. `database` reports whether the
/// store answered a ping, so a degraded deployment is visible.
///
/// ```json
/// {
///   "success": true,
///   "data": { "status": "OK", "database": "up" },
///   "message": "Health check passed"
/// }
/// ```
async fn health_check(State(app_state): State<AppState>) -> impl IntoResponse {
    let database = match app_state.db().ping().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the database");
            "down"
        }
    };

    Json(ApiResponse::success(
        HealthResponse {
            status: "OK",
            database,
        },
        "Health check passed",
    ))
}
