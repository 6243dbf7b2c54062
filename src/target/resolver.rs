//! Identity resolution across the legacy and redesigned schemas.
//!
//! The new store assigns its own identifiers on insert, so legacy numeric ids
//! never cross over. Accounts are bridged through their ssn; applications are
//! bridged through the owning account id with get-or-create semantics.
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::MigrationError;
use crate::models::{MigratedAccount, MigratedApplication};
use crate::target::writer;

pub struct IdentityResolver {
    pool: SqlitePool,
    registered_at: DateTime<Utc>,
    // One application per account; filled on first resolution.
    applications: HashMap<i64, MigratedApplication>,
}

impl IdentityResolver {
    pub fn new(pool: SqlitePool, registered_at: DateTime<Utc>) -> Self {
        IdentityResolver {
            pool,
            registered_at,
            applications: HashMap::new(),
        }
    }

    /// Look up a migrated account by its natural key.
    ///
    /// Accounts must already have been migrated; an unknown ssn here means
    /// the caller broke the phase ordering, or the legacy data is
    /// inconsistent.
    pub async fn resolve_account(&self, ssn: &str) -> Result<MigratedAccount, MigrationError> {
        writer::account_by_ssn(&self.pool, ssn)
            .await?
            .ok_or_else(|| MigrationError::AccountNotFound(ssn.to_string()))
    }

    /// Return the account's application, creating it on first reference.
    ///
    /// Idempotent within a run: every call after the first returns the same
    /// application without touching the store again.
    pub async fn resolve_or_create_application(
        &mut self,
        account: &MigratedAccount,
    ) -> Result<MigratedApplication, MigrationError> {
        if let Some(application) = self.applications.get(&account.id) {
            return Ok(application.clone());
        }

        let application = match writer::application_for_account(&self.pool, account.id).await? {
            Some(application) => application,
            None => {
                writer::insert_application(&self.pool, account.id, self.registered_at).await?;

                // Select back to learn the store-assigned id.
                writer::application_for_account(&self.pool, account.id)
                    .await?
                    .ok_or(MigrationError::ApplicationNotFound(account.id))?
            }
        };

        self.applications.insert(account.id, application.clone());
        Ok(application)
    }
}
