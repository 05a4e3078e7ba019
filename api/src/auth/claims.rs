use db::models::user::Role;
use serde::{Deserialize, Serialize};
use services::Caller;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

/// Bearer token of the current request, already decoded by the request logger.
///
/// Only a token that verified (or its absence) is cached; a rejected token is
/// left for the guard to reject.
#[derive(Debug, Clone)]
pub struct VerifiedClaims(pub Option<Claims>);

impl AuthUser {
    pub fn caller(&self) -> Caller {
        Caller::new(self.0.sub, self.0.role)
    }
}
