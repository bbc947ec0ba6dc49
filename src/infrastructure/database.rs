//! SQLite connection pool setup and schema migrations.

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

/// Embedded migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool on the SQLite file at `storage_path`.
///
/// The file and its parent directory are created if they do not exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the database
/// cannot be opened within `connect_timeout`.
pub async fn connect(
    storage_path: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(storage_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(storage_path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect_with(options)
        .await
}

/// Applies pending migrations. The schema uses `CREATE TABLE IF NOT EXISTS`,
/// so running against an existing database is safe.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
