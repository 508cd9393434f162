//! Persistence layer: SQLite pool, embedded migrations, entity models,
//! repositories and the nested JSON renderer.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod graph;
pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// Every connection has `foreign_keys=ON` so the schema's cascade rules fire,
/// and the database file is created on first use.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Migrations embedded from `crates/db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply all pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Applied and pending migration counts, as recorded in `_sqlx_migrations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Version of the newest successfully applied migration.
    pub latest: Option<i64>,
    pub pending: usize,
}

/// Compare the embedded migrations against the ones the database has applied.
///
/// A database that has never been migrated reports every migration pending.
pub async fn migration_status(pool: &DbPool) -> Result<MigrationStatus, sqlx::Error> {
    let table: Option<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_optional(pool)
    .await?;

    let applied: Vec<i64> = if table.is_some() {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(pool)
            .await?
    } else {
        Vec::new()
    };

    let pending = MIGRATOR
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .count();

    Ok(MigrationStatus {
        latest: applied.iter().copied().max(),
        pending,
    })
}
