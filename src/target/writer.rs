// Target store insert and select functions
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::config::INITIAL_APPLICATION_STATUS;
use crate::error::MigrationError;
use crate::models::{
    LegacyAccount, LegacyAvailability, LegacyCompetenceProfile, MigratedAccount,
    MigratedApplication,
};

pub async fn insert_account(
    pool: &SqlitePool,
    account: &LegacyAccount,
    role: &str,
    password: Option<&str>,
) -> Result<(), MigrationError> {
    sqlx::query(
        "INSERT INTO ACCOUNT (FIRSTNAME, LASTNAME, EMAIL, USERNAME, PASSWORD, ACC_ROLE, SSN) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&account.first_name)
    .bind(&account.last_name)
    .bind(&account.email)
    .bind(account.username.as_deref())
    .bind(password)
    .bind(role)
    .bind(&account.ssn)
    .execute(pool)
    .await?;

    Ok(())
}

/// Look up an ACCOUNT row by its natural key.
pub async fn account_by_ssn(
    pool: &SqlitePool,
    ssn: &str,
) -> Result<Option<MigratedAccount>, MigrationError> {
    let row = sqlx::query(
        "SELECT ID, FIRSTNAME, LASTNAME, EMAIL, USERNAME, PASSWORD, ACC_ROLE, SSN \
         FROM ACCOUNT WHERE SSN = ?",
    )
    .bind(ssn)
    .fetch_optional(pool)
    .await?;

    row.map(|row| decode_account(&row)).transpose()
}

/// Read back every migrated ACCOUNT row, store-assigned ids included.
pub async fn all_accounts(pool: &SqlitePool) -> Result<Vec<MigratedAccount>, MigrationError> {
    let rows = sqlx::query(
        "SELECT ID, FIRSTNAME, LASTNAME, EMAIL, USERNAME, PASSWORD, ACC_ROLE, SSN \
         FROM ACCOUNT ORDER BY ID",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(decode_account).collect()
}

pub async fn insert_account_group(
    pool: &SqlitePool,
    account: &MigratedAccount,
) -> Result<(), MigrationError> {
    sqlx::query("INSERT INTO ACCOUNT_GROUPS (GROUPNAME, USERNAME, ACCOUNT) VALUES (?, ?, ?)")
        .bind(&account.role)
        .bind(account.username.as_deref())
        .bind(account.id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn insert_application(
    pool: &SqlitePool,
    account_id: i64,
    registered_at: DateTime<Utc>,
) -> Result<(), MigrationError> {
    sqlx::query("INSERT INTO APPLICATION (APPL_STATUS, TIME_OF_REG, ACC_ID) VALUES (?, ?, ?)")
        .bind(INITIAL_APPLICATION_STATUS)
        .bind(registered_at)
        .bind(account_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Look up the APPLICATION row owned by an account, if one exists yet.
pub async fn application_for_account(
    pool: &SqlitePool,
    account_id: i64,
) -> Result<Option<MigratedApplication>, MigrationError> {
    let row = sqlx::query(
        "SELECT ID, APPL_STATUS, TIME_OF_REG, ACC_ID FROM APPLICATION WHERE ACC_ID = ?",
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| decode_application(&row)).transpose()
}

pub async fn insert_availability(
    pool: &SqlitePool,
    availability: &LegacyAvailability,
    application_id: i64,
) -> Result<(), MigrationError> {
    sqlx::query("INSERT INTO AVAILABILITY (FROM_DATE, TO_DATE, APPL_ID) VALUES (?, ?, ?)")
        .bind(availability.from_date)
        .bind(availability.to_date)
        .bind(application_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn insert_competence(pool: &SqlitePool, name: &str) -> Result<(), MigrationError> {
    sqlx::query("INSERT INTO COMPETENCE (NAME) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn insert_competence_profile(
    pool: &SqlitePool,
    profile: &LegacyCompetenceProfile,
    competence: &str,
    application_id: i64,
) -> Result<(), MigrationError> {
    // COMP_ID carries the competence name in the redesigned schema.
    sqlx::query("INSERT INTO COMPETENCEPROFILE (YEARS_OF_EXP, COMP_ID, APPL_ID) VALUES (?, ?, ?)")
        .bind(profile.years_of_experience.to_string())
        .bind(competence)
        .bind(application_id)
        .execute(pool)
        .await?;

    Ok(())
}

fn decode_account(row: &SqliteRow) -> Result<MigratedAccount, MigrationError> {
    Ok(MigratedAccount {
        id: row.try_get("ID")?,
        first_name: row.try_get("FIRSTNAME")?,
        last_name: row.try_get("LASTNAME")?,
        email: row.try_get("EMAIL")?,
        username: row.try_get("USERNAME")?,
        password: row.try_get("PASSWORD")?,
        role: row.try_get("ACC_ROLE")?,
        ssn: row.try_get("SSN")?,
    })
}

fn decode_application(row: &SqliteRow) -> Result<MigratedApplication, MigrationError> {
    Ok(MigratedApplication {
        id: row.try_get("ID")?,
        status: row.try_get("APPL_STATUS")?,
        registered_at: row.try_get("TIME_OF_REG")?,
        account_id: row.try_get("ACC_ID")?,
    })
}
