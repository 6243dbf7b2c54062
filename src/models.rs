// Data models for migration
use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};

/// A `person` row from the legacy store. Keyed by its legacy id in the
/// snapshot; the new store assigns its own identifiers on insert.
#[derive(Debug, Clone)]
pub struct LegacyAccount {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub email: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role_id: i64,
}

#[derive(Debug, Clone)]
pub struct LegacyAvailability {
    pub id: i64,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub account_id: i64,
}

#[derive(Debug, Clone)]
pub struct LegacyCompetenceProfile {
    pub id: i64,
    pub years_of_experience: BigDecimal,
    pub account_id: i64,
    pub competence_id: i64,
}

/// Everything extracted from the legacy store, keyed by legacy id.
///
/// Built once during the load phase and read-only afterwards. Ordered maps
/// keep re-insertion deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct LegacySnapshot {
    pub roles: BTreeMap<i64, String>,
    pub competences: BTreeMap<i64, String>,
    pub accounts: BTreeMap<i64, LegacyAccount>,
    pub availabilities: BTreeMap<i64, LegacyAvailability>,
    pub profiles: BTreeMap<i64, LegacyCompetenceProfile>,
}

/// An ACCOUNT row read back from the target store, id included.
#[derive(Debug, Clone)]
pub struct MigratedAccount {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: String,
    pub ssn: String,
}

/// An APPLICATION row read back from the target store.
#[derive(Debug, Clone)]
pub struct MigratedApplication {
    pub id: i64,
    pub status: String,
    pub registered_at: DateTime<Utc>,
    pub account_id: i64,
}
