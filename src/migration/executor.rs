// Migration executor - orchestrates the write phase
use std::time::Instant;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::MigrationError;
use crate::migration::{accounts, applications};
use crate::models::LegacySnapshot;

/// Migration executor that coordinates the write phase against the target
/// store.
pub struct MigrationExecutor {
    pool: SqlitePool,
    registered_at: DateTime<Utc>,
}

impl MigrationExecutor {
    /// Create a new migration executor.
    ///
    /// `registered_at` is captured once per run and stamped on every
    /// application the run creates.
    pub fn new(pool: SqlitePool, registered_at: DateTime<Utc>) -> Self {
        Self {
            pool,
            registered_at,
        }
    }

    /// Execute the full write phase: accounts and memberships first, then
    /// applications and their dependent rows.
    pub async fn execute(&self, snapshot: &LegacySnapshot) -> Result<(), MigrationError> {
        let start_time = Instant::now();

        info!("=== Writing to target store ===");
        accounts::migrate_accounts(&self.pool, snapshot).await?;
        applications::migrate_applications(&self.pool, snapshot, self.registered_at).await?;

        let elapsed = start_time.elapsed();
        info!("=== Migration Complete ===");
        info!("Total time: {:.2}s", elapsed.as_secs_f64());
        info!("Accounts: {}", snapshot.accounts.len());
        info!("Availabilities: {}", snapshot.availabilities.len());
        info!("Competences: {}", snapshot.competences.len());
        info!("Competence profiles: {}", snapshot.profiles.len());

        Ok(())
    }
}
