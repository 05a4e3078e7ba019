use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::{Model as UserModel, Role};
use serde::Serialize;
use services::user_service::UserService;
use util::state::AppState;

use crate::auth::guards::CallerContext;
use crate::response::{ApiError, ApiResponse, Empty};

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: Role,
    pub last_signed_in: String,
}

impl From<UserModel> for MeResponse {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            open_id: user.open_id,
            name: user.name,
            email: user.email,
            login_method: user.login_method,
            role: user.role,
            last_signed_in: user.last_signed_in.to_rfc3339(),
        }
    }
}

/// GET /api/auth/me
///
/// Returns the authenticated user's profile.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "message": "User data retrieved successfully",
///   "data": {
///     "id": 42,
///     "open_id": "oid-42",
///     "name": "Booth Staff",
///     "email": "staff@example.com",
///     "login_method": "oauth",
///     "role": "user",
///     "last_signed_in": "2025-06-18T10:00:00+00:00"
///   }
/// }
/// ```
///
/// ### Errors
/// - 401 when no valid token is sent
/// - 404 when the token's user no longer exists
pub async fn get_me(
    State(app_state): State<AppState>,
    Extension(caller): Extension<CallerContext>,
) -> Result<impl IntoResponse, ApiError> {
    match UserService::current(app_state.db(), caller.caller()).await? {
        Some(user) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(MeResponse::from(user), "User data retrieved successfully")),
        )
            .into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("User not found")),
        )
            .into_response()),
    }
}
