//! Resident domain record.
//!
//! # Responsibility
//! - Define the canonical record for one registered resident.
//! - Keep the serde shape identical to the persisted JSON array entries.
//!
//! # Invariants
//! - `id` is stable and never reused for another resident.
//! - `age` holds the value computed at the last create/update; it is not
//!   recomputed on read.
//! - `date_registered` is assigned once at creation and survives updates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a resident record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ResidentId = Uuid;

/// Resident gender as captured on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Civil status options recognized by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CivilStatus {
    Single,
    Married,
    Widowed,
    Separated,
}

/// Voter registration status. New records default to not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VoterStatus {
    Registered,
    #[default]
    #[serde(rename = "Not Registered")]
    NotRegistered,
}

/// Canonical record for one resident.
///
/// Serialized entries use the wire names of the existing payload
/// (camelCase, enum labels like `"Not Registered"`). Optional fields are
/// omitted when absent; unknown fields make the entry unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Resident {
    /// Primary key, assigned at creation and immutable afterwards.
    pub id: ResidentId,
    /// Base64 `data:image/...` URL; the intake boundary caps the source
    /// file at 5 MiB before it gets here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Generational suffix, e.g. "Jr." or "III".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub birth_date: NaiveDate,
    /// Completed years as of the write that last touched this record.
    /// Stale between edits; negative when the birth date lies ahead.
    pub age: i32,
    pub gender: Gender,
    pub civil_status: CivilStatus,
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    /// Locality subdivision the resident belongs to.
    pub purok: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Currency-formatted free text, e.g. "₱12,000".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<String>,
    #[serde(default)]
    pub household_head: bool,
    /// Shared key grouping household members; blank counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<String>,
    #[serde(default)]
    pub voter_status: VoterStatus,
    #[serde(default)]
    pub pwd_status: bool,
    #[serde(default)]
    pub senior_citizen: bool,
    #[serde(default)]
    pub indigent: bool,
    pub date_registered: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Resident {
    /// Key grouping this record into a household.
    ///
    /// The shared household id when present and non-blank, otherwise the
    /// record's own `id` (a singleton household).
    pub fn household_key(&self) -> String {
        match self.household_id.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => self.id.to_string(),
        }
    }
}
