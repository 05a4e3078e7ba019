use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use services::AppError;
use util::config;

use crate::auth::claims::{AuthUser, Claims, VerifiedClaims};
use crate::response::ApiError;

/// Reads the bearer token from `parts`, if any.
///
/// A request without an `Authorization` header is anonymous and yields
/// `Ok(None)`. A header that is malformed, or a token that fails
/// verification or has expired, is rejected as unauthenticated. Claims that
/// [`log_request`](crate::auth::middleware::log_request) already verified are
/// reused without decoding again.
pub fn bearer_claims(parts: &Parts) -> Result<Option<Claims>, AppError> {
    if let Some(VerifiedClaims(claims)) = parts.extensions.get::<VerifiedClaims>() {
        return Ok(claims.clone());
    }

    let header = parts
        .headers
        .typed_try_get::<Authorization<Bearer>>()
        .map_err(|_| AppError::Unauthenticated)?;

    let Some(Authorization(bearer)) = header else {
        return Ok(None);
    };

    let token_data = decode::<Claims>(
        bearer.token(),
        &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| AppError::Unauthenticated)?;

    Ok(Some(token_data.claims))
}

/// Requires a valid bearer token.
///
/// # Example
/// ```ignore
/// async fn protected_route(user: AuthUser) -> impl IntoResponse {
///     // User is now available
/// }
/// ```
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_claims(parts)?
            .map(AuthUser)
            .ok_or(ApiError(AppError::Unauthenticated))
    }
}

/// `Option<AuthUser>`: anonymous when no header is sent, rejected when the token is bad.
impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(bearer_claims(parts)?.map(AuthUser))
    }
}
