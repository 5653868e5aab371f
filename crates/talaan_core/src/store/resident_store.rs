//! Whole-collection resident persistence.
//!
//! # Responsibility
//! - Provide load/save/insert/update/delete/lookup over the collection.
//! - Keep serialization details inside the store boundary.
//!
//! # Invariants
//! - Mutations are full read-modify-write cycles against the backend.
//! - A corrupt persisted payload degrades reads to an empty collection and
//!   is surfaced only through the log, never to the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::error;

use crate::model::resident::{Resident, ResidentId};
use crate::store::backend::{BackendError, StorageBackend};

pub type StoreResult<T> = Result<T, StoreError>;

/// Write-path failure raised by [`ResidentStore`].
#[derive(Debug)]
pub enum StoreError {
    Backend(BackendError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "{err}"),
            Self::Serialize(err) => {
                write!(f, "failed to serialize resident collection: {err}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<BackendError> for StoreError {
    fn from(value: BackendError) -> Self {
        Self::Backend(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable store for the resident collection, addressed by `id`.
///
/// Construct one per session with the persistence backend of choice and
/// pass it by reference; there is no ambient global instance.
pub struct ResidentStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ResidentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the full persisted collection, insertion order preserved.
    ///
    /// Fails soft: an unreadable or unparseable payload yields an empty
    /// collection, with the failure reported through the log only.
    pub fn load_all(&self) -> Vec<Resident> {
        let payload = match self.backend.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!("event=store_load module=store status=error error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(residents) => residents,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=corrupt_payload error={err}"
                );
                Vec::new()
            }
        }
    }

    /// Replaces the entire persisted collection with `residents`.
    pub fn save_all(&self, residents: &[Resident]) -> StoreResult<()> {
        let payload = serde_json::to_string(residents)?;
        self.backend.write(&payload)?;
        Ok(())
    }

    /// Appends `resident` to the end of the collection and persists.
    ///
    /// The caller supplies a record whose `id`, `age` and `date_registered`
    /// are already assigned; no validation happens here.
    pub fn insert(&self, resident: Resident) -> StoreResult<()> {
        let mut residents = self.load_all();
        residents.push(resident);
        self.save_all(&residents)
    }

    /// Replaces the record matching `id`, keeping its position.
    ///
    /// Silently does nothing when no record matches.
    pub fn update(&self, id: ResidentId, resident: Resident) -> StoreResult<()> {
        let mut residents = self.load_all();
        match residents.iter().position(|r| r.id == id) {
            Some(index) => {
                residents[index] = resident;
                self.save_all(&residents)
            }
            None => Ok(()),
        }
    }

    /// Removes the record matching `id`; silently does nothing when absent.
    pub fn delete(&self, id: ResidentId) -> StoreResult<()> {
        let mut residents = self.load_all();
        let len_before = residents.len();
        residents.retain(|r| r.id != id);
        if residents.len() == len_before {
            return Ok(());
        }
        self.save_all(&residents)
    }

    /// Linear lookup by primary key.
    pub fn get_by_id(&self, id: ResidentId) -> Option<Resident> {
        self.load_all().into_iter().find(|r| r.id == id)
    }
}
