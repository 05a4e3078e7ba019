use chrono::Utc;
use db::models::user::{LoginProfile, Model as User, Role};
use sea_orm::DatabaseConnection;
use tracing::info;
use util::config;

use crate::caller::Caller;
use crate::error::{degrade, AppError, AppResult};
use crate::policy::{require_caller, Operation};

pub struct UserService;

impl UserService {
    /// Called by the identity provider integration after each successful login.
    ///
    /// Creates the user on first sight and refreshes `last_signed_in` on every
    /// call. The configured owner is promoted to admin unless a role is given.
    pub async fn record_login(db: &DatabaseConnection, mut profile: LoginProfile) -> AppResult<User> {
        let open_id = profile.open_id.trim();
        if open_id.is_empty() {
            return Err(AppError::Validation("open_id must not be empty".into()));
        }
        profile.open_id = open_id.to_owned();

        if profile.role.is_none() && config::owner_open_id().as_deref() == Some(profile.open_id.as_str()) {
            profile.role = Some(Role::Admin);
        }

        let first_login = User::find_by_open_id(db, &profile.open_id).await?.is_none();
        let user = User::upsert_login(db, profile, Utc::now()).await?;
        info!(user_id = user.id, role = %user.role, first_login, "user signed in");
        Ok(user)
    }

    /// The caller's own user row. `None` when the row is gone or the store is unreachable.
    pub async fn current(db: &DatabaseConnection, caller: Option<&Caller>) -> AppResult<Option<User>> {
        let caller = require_caller(caller, Operation::CurrentUser)?;
        degrade(User::find_by_id(db, caller.id).await, None, "current_user")
    }
}
