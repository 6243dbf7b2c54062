// Legacy store module - scratch store setup, dump loading and snapshot extraction
pub mod connection;
pub mod extractor;
pub mod loader;

pub use connection::open_scratch;
pub use extractor::extract_snapshot;
pub use loader::{run_dump, run_dump_file};

use std::path::Path;

use sqlx::SqlitePool;
use tracing::info;

use crate::error::MigrationError;
use crate::models::LegacySnapshot;

/// Replay the dump into a fresh scratch store and extract the snapshot.
///
/// The scratch store is closed before this returns, on success and failure
/// alike; nothing holds it open once the write phase begins.
pub async fn load_snapshot(dump_path: &Path) -> Result<LegacySnapshot, MigrationError> {
    let pool = connection::open_scratch().await?;
    let result = load_into(&pool, dump_path).await;
    pool.close().await;
    result
}

async fn load_into(pool: &SqlitePool, dump_path: &Path) -> Result<LegacySnapshot, MigrationError> {
    loader::run_dump_file(pool, dump_path).await?;
    info!("Legacy database created!");
    extractor::extract_snapshot(pool).await
}
