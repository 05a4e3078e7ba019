//! # auth Routes Module
//!
//! Routes for the `/auth` endpoint group. Login itself is handled by the
//! external identity provider, which records the user through
//! `UserService::record_login` and issues the bearer token.

pub mod get;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use services::Operation;
use util::state::AppState;

use crate::auth::guards::authorize;
use get::get_me;

/// Builds the `/auth` route group.
///
/// - `GET /auth/me` → `get_me`
pub fn auth_routes() -> Router<AppState> {
    Router::new().route(
        "/me",
        get(get_me).route_layer(from_fn_with_state(Operation::CurrentUser, authorize)),
    )
}
