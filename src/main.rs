use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use recruitool_migrate::{config, legacy, migration::MigrationExecutor, target};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let dump_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_DUMP_PATH));

    info!("Starting legacy recruitment database migration");

    // Load phase: the scratch store is opened, drained and closed before any
    // write to the target store begins.
    let snapshot = legacy::load_snapshot(&dump_path).await?;

    info!("Connecting to target store...");
    let pool = target::connect().await?;
    info!("✓ Connected to target store");

    let executor = MigrationExecutor::new(pool.clone(), Utc::now());
    let result = executor.execute(&snapshot).await;
    pool.close().await;
    result?;

    info!("Database migration completed!");
    Ok(())
}
