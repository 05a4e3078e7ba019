use db::errors::{is_foreign_key_violation, is_unavailable, is_unique_violation};
use sea_orm::DbErr;
use thiserror::Error;

use crate::policy::Operation;

/// Errors surfaced by every service operation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced entity does not exist. Holds the entity kind, e.g. `"student"`.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("forbidden: {0} requires an admin")]
    Forbidden(Operation),

    #[error("authentication required")]
    Unauthenticated,

    #[error("storage is unavailable")]
    Unavailable,

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(DbErr),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if is_unavailable(&err) {
            AppError::Unavailable
        } else {
            AppError::Database(err)
        }
    }
}

impl AppError {
    /// Maps a write failure, turning constraint violations into `Conflict`
    /// with the given messages.
    pub(crate) fn from_write(err: DbErr, on_unique: &str, on_reference: &str) -> Self {
        if is_unique_violation(&err) {
            AppError::Conflict(on_unique.to_owned())
        } else if is_foreign_key_violation(&err) {
            AppError::Conflict(on_reference.to_owned())
        } else {
            err.into()
        }
    }
}

/// Read-side fallback: an unreachable store yields `fallback` instead of an error.
pub(crate) fn degrade<T>(result: Result<T, DbErr>, fallback: T, what: &str) -> AppResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) if is_unavailable(&err) => {
            tracing::warn!(error = %err, query = what, "storage unavailable, returning empty result");
            Ok(fallback)
        }
        Err(err) => Err(AppError::Database(err)),
    }
}
