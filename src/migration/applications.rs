// Application transformer - APPLICATION rows and their dependent records
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::MigrationError;
use crate::models::{LegacyAccount, LegacySnapshot};
use crate::target::{writer, IdentityResolver};

/// Migrate everything that hangs off an application: availability windows,
/// the competence catalog, and competence profiles.
///
/// Runs strictly after the account transformer. All three passes share one
/// resolver, so the first dependent row of an account creates its
/// application and every later row reuses it.
pub async fn migrate_applications(
    pool: &SqlitePool,
    snapshot: &LegacySnapshot,
    registered_at: DateTime<Utc>,
) -> Result<(), MigrationError> {
    let mut resolver = IdentityResolver::new(pool.clone(), registered_at);

    migrate_availabilities(pool, snapshot, &mut resolver).await?;
    migrate_competences(pool, snapshot).await?;
    migrate_competence_profiles(pool, snapshot, &mut resolver).await?;

    Ok(())
}

async fn migrate_availabilities(
    pool: &SqlitePool,
    snapshot: &LegacySnapshot,
    resolver: &mut IdentityResolver,
) -> Result<(), MigrationError> {
    for availability in snapshot.availabilities.values() {
        let owner = owning_account(
            snapshot,
            "availability",
            availability.id,
            availability.account_id,
        )?;

        let account = resolver.resolve_account(&owner.ssn).await?;
        let application = resolver.resolve_or_create_application(&account).await?;

        writer::insert_availability(pool, availability, application.id).await?;
    }

    info!("✓ Migrated {} availabilities", snapshot.availabilities.len());
    Ok(())
}

async fn migrate_competences(
    pool: &SqlitePool,
    snapshot: &LegacySnapshot,
) -> Result<(), MigrationError> {
    for name in snapshot.competences.values() {
        writer::insert_competence(pool, name).await?;
    }

    info!("✓ Migrated {} competences", snapshot.competences.len());
    Ok(())
}

async fn migrate_competence_profiles(
    pool: &SqlitePool,
    snapshot: &LegacySnapshot,
    resolver: &mut IdentityResolver,
) -> Result<(), MigrationError> {
    for profile in snapshot.profiles.values() {
        let owner = owning_account(
            snapshot,
            "competence_profile",
            profile.id,
            profile.account_id,
        )?;

        // Validate the competence reference before any write for this row.
        let competence = snapshot
            .competences
            .get(&profile.competence_id)
            .ok_or(MigrationError::MissingCompetence(profile.competence_id))?;

        let account = resolver.resolve_account(&owner.ssn).await?;
        let application = resolver.resolve_or_create_application(&account).await?;

        writer::insert_competence_profile(pool, profile, competence, application.id).await?;
    }

    info!("✓ Migrated {} competence profiles", snapshot.profiles.len());
    Ok(())
}

fn owning_account<'a>(
    snapshot: &'a LegacySnapshot,
    table: &'static str,
    row_id: i64,
    account_id: i64,
) -> Result<&'a LegacyAccount, MigrationError> {
    snapshot
        .accounts
        .get(&account_id)
        .ok_or(MigrationError::DanglingReference {
            table,
            row_id,
            account_id,
        })
}
