// Scratch store setup
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::config::SCRATCH_MAX_CONNECTIONS;
use crate::error::MigrationError;

/// Open the in-memory scratch store the legacy dump is replayed into.
///
/// The database exists only inside its single pooled connection, so idle
/// reaping and connection lifetimes are disabled.
pub async fn open_scratch() -> Result<SqlitePool, MigrationError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(SCRATCH_MAX_CONNECTIONS)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    Ok(pool)
}
