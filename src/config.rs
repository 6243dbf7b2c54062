// Configuration constants and environment helpers
use anyhow::{Context, Result};

/// Dump path used when no argument is given.
pub const DEFAULT_DUMP_PATH: &str = "old.sql";

// The scratch store is an in-memory database that lives exactly as long as
// its single connection, so the pool must never grow past one.
pub const SCRATCH_MAX_CONNECTIONS: u32 = 1;

// Target writes are strictly sequential.
pub const TARGET_MAX_CONNECTIONS: u32 = 1;

/// Status assigned to every application created by the migration.
pub const INITIAL_APPLICATION_STATUS: &str = "SUBMITTED";

/// Role whose accounts carry no login credentials and get no group row.
pub const APPLICANT_ROLE: &str = "APPLICANT";

/// Get TARGET_DATABASE_URL from environment
pub fn get_target_database_url() -> Result<String> {
    std::env::var("TARGET_DATABASE_URL").context("TARGET_DATABASE_URL must be set")
}
