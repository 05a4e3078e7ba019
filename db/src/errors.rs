//! Classification of store errors.
//!
//! The service layer turns these into typed outcomes: unique violations become
//! conflicts, foreign-key violations on delete become conflicts, and
//! connection failures put reads into degraded mode.

use sea_orm::{DbErr, SqlErr};

/// True when `err` was raised by a `UNIQUE` constraint or index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        || err.to_string().contains("UNIQUE constraint failed")
}

/// True when `err` was raised by a foreign-key constraint.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        || err.to_string().contains("FOREIGN KEY constraint failed")
}

/// True when the store could not be reached at all (pool closed, connect
/// failure, acquire timeout).
pub fn is_unavailable(err: &DbErr) -> bool {
    matches!(err, DbErr::ConnectionAcquire(_) | DbErr::Conn(_))
}

/// Message of a unique violation, naming the offending column where the driver reports it.
pub fn violation_detail(err: &DbErr) -> String {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => msg,
        _ => err.to_string(),
    }
}
