pub mod errors;
pub mod models;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

pub use errors::{is_foreign_key_violation, is_unavailable, is_unique_violation};

/// Builds the connection pool for `url`.
///
/// The pool connects lazily, so an unreachable store does not prevent startup;
/// the first query reports the failure instead.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(8)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(true)
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    tracing::info!(url, "database pool ready");
    Ok(db)
}

/// Closes every pooled connection. Call once on shutdown.
pub async fn disconnect(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await?;
    tracing::info!("database pool closed");
    Ok(())
}
