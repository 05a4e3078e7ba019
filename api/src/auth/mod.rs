pub mod middleware;
pub mod claims;
pub mod extractors;
pub mod guards;

pub use claims::{Claims, AuthUser};

use chrono::{Utc, Duration};
use db::models::user::Role;
use jsonwebtoken::{encode, Header, EncodingKey};
use util::config;

/// Upper bound on token lifetime, one year.
const MAX_TOKEN_MINUTES: u64 = 60 * 24 * 365;

/// Generates a JWT and its expiry timestamp for a given user.
///
/// The identity provider integration calls this after recording the login.
pub fn generate_jwt(user_id: i64, role: Role) -> Result<(String, String), jsonwebtoken::errors::Error> {
    let minutes = config::jwt_duration_minutes().min(MAX_TOKEN_MINUTES) as i64;
    let expiry = Utc::now() + Duration::minutes(minutes);

    let claims = Claims {
        sub: user_id,
        role,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
    )?;

    Ok((token, expiry.to_rfc3339()))
}
