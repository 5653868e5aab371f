//! Resident use-case service and intake validation.
//!
//! # Responsibility
//! - Expose the registry's read and write operation set over one store.
//! - Assign derived fields (`id`, `age`, `date_registered`) on writes.
//! - Enforce intake constraints before anything reaches the store.
//!
//! # Invariants
//! - `date_registered` is stamped at creation and survives every update.
//! - `age` is recomputed from the birth date on every create and update.
//! - The store receives structurally complete records only; it performs no
//!   validation of its own.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::model::resident::{CivilStatus, Gender, Resident, ResidentId, VoterStatus};
use crate::query::age::calculate_age;
use crate::query::filter::{distinct_puroks, filter, search, ResidentFilter};
use crate::query::stats::{aggregate_stats, recent, ResidentStats};
use crate::store::{ResidentStore, StorageBackend, StoreError};

/// Largest accepted source size for a profile picture, in bytes.
pub const MAX_PHOTO_SOURCE_BYTES: usize = 5 * 1024 * 1024;

static DATA_IMAGE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/[A-Za-z0-9.+-]+;base64,").expect("valid data-url regex")
});

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Intake validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    MissingField(&'static str),
    /// Profile picture is not a base64 `data:image/...` URL.
    InvalidPhotoEncoding,
    /// Profile picture decodes to more than [`MAX_PHOTO_SOURCE_BYTES`].
    PhotoTooLarge { source_bytes: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
            Self::InvalidPhotoEncoding => {
                write!(f, "profile picture must be a base64 data:image URL")
            }
            Self::PhotoTooLarge { source_bytes } => write!(
                f,
                "profile picture source is {source_bytes} bytes; limit is {MAX_PHOTO_SOURCE_BYTES}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Service error for registry operations.
#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationError),
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Caller-settable fields for create and update operations.
///
/// `id`, `age` and `date_registered` are always assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentInput {
    pub profile_picture: Option<String>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: Option<String>,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub civil_status: CivilStatus,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: String,
    pub purok: String,
    pub occupation: Option<String>,
    pub monthly_income: Option<String>,
    pub household_head: bool,
    pub household_id: Option<String>,
    pub voter_status: VoterStatus,
    pub pwd_status: bool,
    pub senior_citizen: bool,
    pub indigent: bool,
    pub remarks: Option<String>,
}

impl ResidentInput {
    /// Checks the intake constraints the presentation layer must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("middleName", &self.middle_name),
            ("lastName", &self.last_name),
            ("contactNumber", &self.contact_number),
            ("address", &self.address),
            ("purok", &self.purok),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        if let Some(photo) = self.profile_picture.as_deref() {
            validate_photo(photo)?;
        }

        Ok(())
    }

    fn into_resident(
        self,
        id: ResidentId,
        age: i32,
        date_registered: DateTime<Utc>,
    ) -> Resident {
        Resident {
            id,
            profile_picture: self.profile_picture,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            suffix: self.suffix,
            birth_date: self.birth_date,
            age,
            gender: self.gender,
            civil_status: self.civil_status,
            contact_number: self.contact_number,
            email: self.email,
            address: self.address,
            purok: self.purok,
            occupation: self.occupation,
            monthly_income: self.monthly_income,
            household_head: self.household_head,
            household_id: self.household_id,
            voter_status: self.voter_status,
            pwd_status: self.pwd_status,
            senior_citizen: self.senior_citizen,
            indigent: self.indigent,
            date_registered,
            remarks: self.remarks,
        }
    }
}

fn validate_photo(photo: &str) -> Result<(), ValidationError> {
    let Some(header) = DATA_IMAGE_URL_RE.find(photo) else {
        return Err(ValidationError::InvalidPhotoEncoding);
    };

    // Base64 packs three source bytes into four characters; subtracting the
    // padding keeps the estimate exact for well-formed payloads.
    let encoded = &photo[header.end()..];
    let padding = encoded.bytes().rev().take_while(|b| *b == b'=').count();
    let source_bytes = ((encoded.len() / 4) * 3).saturating_sub(padding);
    if source_bytes > MAX_PHOTO_SOURCE_BYTES {
        return Err(ValidationError::PhotoTooLarge { source_bytes });
    }

    Ok(())
}

/// Use-case service for the resident registry.
///
/// Construct one per session with the store of choice; this is the
/// interface presentation layers call into.
pub struct ResidentService<B: StorageBackend> {
    store: ResidentStore<B>,
}

impl<B: StorageBackend> ResidentService<B> {
    pub fn new(store: ResidentStore<B>) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ResidentStore<B> {
        &self.store
    }

    // ── Read paths ───────────────────────────────────────────────────────

    /// Full collection in registration order.
    pub fn list_all(&self) -> Vec<Resident> {
        self.store.load_all()
    }

    /// Single record lookup.
    pub fn get(&self, id: ResidentId) -> Option<Resident> {
        self.store.get_by_id(id)
    }

    /// Case-insensitive name/address search.
    pub fn search(&self, term: &str) -> Vec<Resident> {
        search(&self.store.load_all(), term)
    }

    /// Multi-predicate filtering.
    pub fn filter(&self, criteria: &ResidentFilter) -> Vec<Resident> {
        filter(&self.store.load_all(), criteria)
    }

    /// Distinct purok names for filter controls.
    pub fn distinct_puroks(&self) -> Vec<String> {
        distinct_puroks(&self.store.load_all())
    }

    /// Dashboard counters.
    pub fn stats(&self) -> ResidentStats {
        aggregate_stats(&self.store.load_all())
    }

    /// Most recently registered records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<Resident> {
        recent(&self.store.load_all(), limit)
    }

    // ── Write paths ──────────────────────────────────────────────────────

    /// Registers a new resident and returns the assigned id.
    ///
    /// Generates the id, computes the age from the birth date, and stamps
    /// the registration time before delegating to the store.
    pub fn create(&self, input: ResidentInput) -> ServiceResult<ResidentId> {
        input.validate()?;

        let id = Uuid::new_v4();
        let age = calculate_age(input.birth_date);
        let resident = input.into_resident(id, age, Utc::now());
        self.store.insert(resident)?;
        Ok(id)
    }

    /// Replaces every caller-settable field of the record matching `id`.
    ///
    /// Recomputes the age and keeps the original registration timestamp.
    /// Silently succeeds when no record matches.
    pub fn update(&self, id: ResidentId, input: ResidentInput) -> ServiceResult<()> {
        input.validate()?;

        let Some(existing) = self.store.get_by_id(id) else {
            return Ok(());
        };

        let age = calculate_age(input.birth_date);
        let resident = input.into_resident(id, age, existing.date_registered);
        self.store.update(id, resident)?;
        Ok(())
    }

    /// Removes the record matching `id`; silently succeeds when absent.
    pub fn remove(&self, id: ResidentId) -> ServiceResult<()> {
        self.store.delete(id)?;
        Ok(())
    }
}
