// Target store connection setup
use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::config::{get_target_database_url, TARGET_MAX_CONNECTIONS};

/// Connect to the target store named by TARGET_DATABASE_URL.
pub async fn connect() -> Result<SqlitePool> {
    let database_url = get_target_database_url()?;

    let pool = SqlitePoolOptions::new()
        .max_connections(TARGET_MAX_CONNECTIONS)
        .connect(&database_url)
        .await
        .context("Failed to connect to target store")?;

    Ok(pool)
}
