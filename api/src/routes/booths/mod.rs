//! # Booth Routes Module
//!
//! Routes for the `/api/booths` endpoint group.
//!
//! ## Structure
//! - `get.rs`: list, fetch, and the caller's own booths
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
use delete::delete_booth;
use get::{get_booth, list_booths, my_booths};
use post::create_booth;
use put::update_booth;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/booths` route group.
///
/// - `GET /booths` → `list_booths` (public)
/// - `POST /booths` → `create_booth` (admin)
/// - `GET /booths/mine` → `my_booths` (authenticated)
/// - `GET /booths/{booth_id}` → `get_booth` (public)
/// - `PUT /booths/{booth_id}` → `update_booth` (admin)
/// - `DELETE /booths/{booth_id}` → `delete_booth` (admin)
pub fn booth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_booths).route_layer(from_fn_with_state(Operation::ListBooths, authorize)),
        )
        .route(
            "/",
            post(create_booth).route_layer(from_fn_with_state(Operation::CreateBooth, authorize)),
        )
        .route(
            "/mine",
            get(my_booths).route_layer(from_fn_with_state(Operation::MyBooths, authorize)),
        )
        .route(
            "/{booth_id}",
            get(get_booth).route_layer(from_fn_with_state(Operation::GetBooth, authorize)),
        )
        .route(
            "/{booth_id}",
            put(update_booth).route_layer(from_fn_with_state(Operation::UpdateBooth, authorize)),
        )
        .route(
            "/{booth_id}",
            delete(delete_booth).route_layer(from_fn_with_state(Operation::DeleteBooth, authorize)),
        )
}
