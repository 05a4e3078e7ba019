//! Route guards backed by the access policy table.
//!
//! Each route is wrapped as
//! `route_layer(from_fn_with_state(Operation::X, authorize))`. The guard
//! resolves the caller from the bearer token, rejects the request when the
//! policy refuses it, and stores the caller in the request extensions for the
//! handler.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use services::{Caller, Operation, policy};

use crate::auth::extractors::bearer_claims;
use crate::response::ApiError;

/// Identity resolved by [`authorize`]. `None` for anonymous callers on public routes.
#[derive(Debug, Clone, Copy)]
pub struct CallerContext(pub Option<Caller>);

impl CallerContext {
    pub fn caller(&self) -> Option<&Caller> {
        self.0.as_ref()
    }
}

pub async fn authorize(
    State(op): State<Operation>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = req.into_parts();
    let caller = bearer_claims(&parts)?.map(|c| Caller::new(c.sub, c.role));

    policy::authorize(caller.as_ref(), op)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CallerContext(caller));
    Ok(next.run(req).await)
}
