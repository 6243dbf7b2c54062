//! Error types for the migration.
//! Every variant below aborts the run; only individual dump statements are
//! skipped and logged by the loader.
use thiserror::Error;

/// Represents errors that can occur during a migration run.
///
/// Covers dump loading, legacy-row decoding, dangling legacy lookup keys,
/// identity-resolver misses, and failures from the underlying stores.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Failed to read legacy dump `{path}`: {source}")]
    DumpRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to decode legacy `{table}` row: {detail}")]
    Extraction { table: &'static str, detail: String },

    #[error("Legacy account references unknown role id {0}")]
    MissingRole(i64),

    #[error("Legacy competence profile references unknown competence id {0}")]
    MissingCompetence(i64),

    #[error("Legacy {table} row {row_id} references missing person {account_id}")]
    DanglingReference {
        table: &'static str,
        row_id: i64,
        account_id: i64,
    },

    #[error("No migrated account with ssn `{0}`")]
    AccountNotFound(String),

    #[error("No application for account {0} after insert")]
    ApplicationNotFound(i64),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}
