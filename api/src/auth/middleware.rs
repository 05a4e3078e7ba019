use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use headers::{HeaderMapExt, Origin, UserAgent};
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::auth::claims::VerifiedClaims;
use crate::auth::extractors::bearer_claims;

/// Logs every request with the scanner's identity and client details.
///
/// The bearer token is decoded here once. A verified token (or no token) is
/// stored as [`VerifiedClaims`] so the route guard does not decode it again.
/// Preflight `OPTIONS` requests pass through unlogged.
///
/// ```ignore
/// let app = Router::new().layer(from_fn(log_request));
/// ```
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();
    if parts.method == Method::OPTIONS {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let origin = parts
        .headers
        .typed_get::<Origin>()
        .map(|o| o.to_string())
        .unwrap_or_else(|| "unknown".into());
    let user_agent = parts
        .headers
        .typed_get::<UserAgent>()
        .map(|ua| ua.to_string())
        .unwrap_or_else(|| "unknown".into());

    match bearer_claims(&parts) {
        Ok(claims) => {
            let (user, role) = match &claims {
                Some(c) => (Some(c.sub), c.role.to_string()),
                None => (None, "anonymous".to_owned()),
            };
            info!(
                method = %parts.method,
                path = %parts.uri.path(),
                ip = %addr.ip(),
                user = ?user,
                role,
                origin,
                user_agent,
                "incoming request"
            );
            parts.extensions.insert(VerifiedClaims(claims));
        }
        Err(_) => warn!(
            method = %parts.method,
            path = %parts.uri.path(),
            ip = %addr.ip(),
            origin,
            user_agent,
            "bearer token rejected"
        ),
    }

    next.run(Request::from_parts(parts, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::generate_jwt;
    use crate::auth::guards::{CallerContext, authorize};
    use axum::{
        Extension, Router,
        http::StatusCode,
        middleware::{from_fn, from_fn_with_state},
        routing::get,
    };
    use db::models::user::Role;
    use services::Operation;
    use tower::ServiceExt;

    async fn whoami(Extension(ctx): Extension<CallerContext>) -> String {
        ctx.caller().map(|c| c.id.to_string()).unwrap_or_default()
    }

    fn app() -> Router {
        Router::new()
            .route("/me", get(whoami))
            .route_layer(from_fn_with_state(Operation::CurrentUser, authorize))
            .layer(from_fn(log_request))
    }

    fn request(auth: Option<String>) -> Request<Body> {
        let mut builder = Request::builder().uri("/me");
        if let Some(auth) = auth {
            builder = builder.header("Authorization", auth);
        }
        let mut req = builder.body(Body::empty()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
        req
    }

    #[tokio::test]
    async fn verified_token_reaches_the_guarded_handler() {
        let (token, _) = generate_jwt(42, Role::User).unwrap();

        let response = app()
            .oneshot(request(Some(format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"42");
    }

    #[tokio::test]
    async fn rejected_token_is_still_refused_by_the_guard() {
        let (token, _) = generate_jwt(42, Role::User).unwrap();

        let response = app()
            .oneshot(request(Some(format!("Bearer {token}tampered"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
