// Legacy table extraction into the in-memory snapshot
use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::error::MigrationError;
use crate::models::{LegacyAccount, LegacyAvailability, LegacyCompetenceProfile, LegacySnapshot};

/// Read every legacy table into the snapshot, in dependency-free order.
pub async fn extract_snapshot(pool: &SqlitePool) -> Result<LegacySnapshot, MigrationError> {
    let roles = load_roles(pool).await?;
    info!("{} roles loaded", roles.len());

    let accounts = load_accounts(pool).await?;
    info!("{} accounts loaded", accounts.len());

    let availabilities = load_availabilities(pool).await?;
    info!("{} availabilities loaded", availabilities.len());

    let competences = load_competences(pool).await?;
    info!("{} competences loaded", competences.len());

    let profiles = load_competence_profiles(pool).await?;
    info!("{} competence profiles loaded", profiles.len());

    Ok(LegacySnapshot {
        roles,
        competences,
        accounts,
        availabilities,
        profiles,
    })
}

/// Canonical form of a legacy role name: uppercase, with the known
/// "RECRUIT" misspelling rewritten to "RECRUITER".
fn canonical_role_name(raw: &str) -> String {
    let name = raw.to_uppercase();
    if name == "RECRUIT" {
        "RECRUITER".to_string()
    } else {
        name
    }
}

pub async fn load_roles(pool: &SqlitePool) -> Result<BTreeMap<i64, String>, MigrationError> {
    let rows = sqlx::query("SELECT role_id, name FROM role")
        .fetch_all(pool)
        .await?;

    let mut roles = BTreeMap::new();
    for row in &rows {
        let id: i64 = column(row, "role", "role_id")?;
        let name: String = column(row, "role", "name")?;

        roles.insert(id, canonical_role_name(&name));
    }

    Ok(roles)
}

pub async fn load_accounts(
    pool: &SqlitePool,
) -> Result<BTreeMap<i64, LegacyAccount>, MigrationError> {
    let rows = sqlx::query(
        "SELECT person_id, name, surname, ssn, email, username, password, role_id FROM person",
    )
    .fetch_all(pool)
    .await?;

    let mut accounts = BTreeMap::new();
    for row in &rows {
        let id: i64 = column(row, "person", "person_id")?;

        // `ssn` is the natural key the new schema is bridged through, so a
        // person row without one cannot be migrated at all.
        let account = LegacyAccount {
            first_name: column(row, "person", "name")?,
            last_name: column(row, "person", "surname")?,
            ssn: column(row, "person", "ssn")?,
            email: column(row, "person", "email")?,
            username: column(row, "person", "username")?,
            password: column(row, "person", "password")?,
            role_id: column(row, "person", "role_id")?,
        };

        accounts.insert(id, account);
    }

    Ok(accounts)
}

pub async fn load_availabilities(
    pool: &SqlitePool,
) -> Result<BTreeMap<i64, LegacyAvailability>, MigrationError> {
    let rows =
        sqlx::query("SELECT availability_id, from_date, to_date, person_id FROM availability")
            .fetch_all(pool)
            .await?;

    let mut availabilities = BTreeMap::new();
    for row in &rows {
        let id: i64 = column(row, "availability", "availability_id")?;

        let from_date: NaiveDate = column(row, "availability", "from_date")?;
        let to_date: NaiveDate = column(row, "availability", "to_date")?;

        let availability = LegacyAvailability {
            id,
            from_date,
            to_date,
            account_id: column(row, "availability", "person_id")?,
        };

        availabilities.insert(id, availability);
    }

    Ok(availabilities)
}

pub async fn load_competences(pool: &SqlitePool) -> Result<BTreeMap<i64, String>, MigrationError> {
    let rows = sqlx::query("SELECT competence_id, name FROM competence")
        .fetch_all(pool)
        .await?;

    let mut competences = BTreeMap::new();
    for row in &rows {
        let id: i64 = column(row, "competence", "competence_id")?;
        let name: String = column(row, "competence", "name")?;

        competences.insert(id, name);
    }

    Ok(competences)
}

pub async fn load_competence_profiles(
    pool: &SqlitePool,
) -> Result<BTreeMap<i64, LegacyCompetenceProfile>, MigrationError> {
    // The experience column crosses the driver as text: SQLite has no decimal
    // type, and going through a float would corrupt the value.
    let rows = sqlx::query(
        "SELECT competence_profile_id, CAST(years_of_experience AS TEXT) AS years_of_experience, \
         person_id, competence_id FROM competence_profile",
    )
    .fetch_all(pool)
    .await?;

    let mut profiles = BTreeMap::new();
    for row in &rows {
        let id: i64 = column(row, "competence_profile", "competence_profile_id")?;

        let years_text: String = column(row, "competence_profile", "years_of_experience")?;
        let years_of_experience =
            BigDecimal::from_str(&years_text).map_err(|err| MigrationError::Extraction {
                table: "competence_profile",
                detail: format!("bad years_of_experience `{years_text}`: {err}"),
            })?;

        let profile = LegacyCompetenceProfile {
            id,
            years_of_experience,
            account_id: column(row, "competence_profile", "person_id")?,
            competence_id: column(row, "competence_profile", "competence_id")?,
        };

        profiles.insert(id, profile);
    }

    Ok(profiles)
}

/// Decode a single column, turning driver errors (missing column, NULL in a
/// required column, malformed date) into extraction failures that name the
/// legacy table.
fn column<'r, T>(row: &'r SqliteRow, table: &'static str, name: &str) -> Result<T, MigrationError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name).map_err(|err| MigrationError::Extraction {
        table,
        detail: format!("column `{name}`: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_are_uppercased() {
        assert_eq!(canonical_role_name("applicant"), "APPLICANT");
        assert_eq!(canonical_role_name("Applicant"), "APPLICANT");
    }

    #[test]
    fn recruit_is_rewritten_to_recruiter() {
        assert_eq!(canonical_role_name("recruit"), "RECRUITER");
        assert_eq!(canonical_role_name("RECRUIT"), "RECRUITER");
    }

    #[test]
    fn recruiter_is_left_alone() {
        assert_eq!(canonical_role_name("recruiter"), "RECRUITER");
    }
}
