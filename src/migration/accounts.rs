// Account transformer - ACCOUNT rows and derived ACCOUNT_GROUPS memberships
use sqlx::SqlitePool;
use tracing::info;

use crate::config::APPLICANT_ROLE;
use crate::crypto;
use crate::error::MigrationError;
use crate::models::LegacySnapshot;
use crate::target::writer;

/// Insert one ACCOUNT row per legacy person, then derive group memberships.
///
/// Must run to completion before anything resolves accounts by ssn.
pub async fn migrate_accounts(
    pool: &SqlitePool,
    snapshot: &LegacySnapshot,
) -> Result<(), MigrationError> {
    for account in snapshot.accounts.values() {
        let role = snapshot
            .roles
            .get(&account.role_id)
            .ok_or(MigrationError::MissingRole(account.role_id))?;

        // A person without credentials (a pure applicant) keeps a NULL
        // password; only present cleartext is hashed.
        let password = account.password.as_deref().map(crypto::simple_hash);

        writer::insert_account(pool, account, role, password.as_deref()).await?;
    }
    info!("✓ Migrated {} accounts", snapshot.accounts.len());

    migrate_account_groups(pool).await
}

/// Derive one ACCOUNT_GROUPS row per non-applicant account.
///
/// Re-reads the freshly inserted ACCOUNT rows rather than the snapshot, so
/// store-assigned ids are picked up.
async fn migrate_account_groups(pool: &SqlitePool) -> Result<(), MigrationError> {
    let mut memberships = 0usize;

    for account in writer::all_accounts(pool).await? {
        // Applicants don't have any login credentials
        if account.role == APPLICANT_ROLE {
            continue;
        }

        writer::insert_account_group(pool, &account).await?;
        memberships += 1;
    }

    info!("✓ Derived {} account group memberships", memberships);
    Ok(())
}
