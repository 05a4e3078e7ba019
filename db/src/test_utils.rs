use chrono::Utc;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::Path;

use crate::models::user::{LoginProfile, Model as UserModel, Role};

/// Fresh, fully migrated in-memory database.
///
/// The pool is pinned to a single connection because every SQLite
/// `:memory:` connection is its own database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Fully migrated database file at `path`, opened through the production pool
/// so several connections can contend for it.
pub async fn setup_file_test_db(path: &Path) -> DatabaseConnection {
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let db = crate::connect(&url)
        .await
        .expect("Failed to open file db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Inserts a user as if they had just logged in.
pub async fn create_user(db: &DatabaseConnection, open_id: &str, role: Role) -> UserModel {
    UserModel::upsert_login(
        db,
        LoginProfile {
            open_id: open_id.to_owned(),
            name: Some(open_id.to_owned()),
            role: Some(role),
            ..Default::default()
        },
        Utc::now(),
    )
    .await
    .expect("Failed to create test user")
}

/// Migrated database whose pool has already been closed, so every query fails
/// the way an unreachable store does.
pub async fn closed_test_db() -> DatabaseConnection {
    let db = setup_test_db().await;
    let handle = db.clone();
    db.close().await.expect("Failed to close test pool");
    handle
}
