//! Core library for Talaan, a barangay resident registry.
//!
//! Owns the durable resident collection (`store`), the pure query and
//! aggregation layer (`query`), and the operation set presentation layers
//! call into (`service`). This crate is the single source of truth for
//! registry invariants; rendering and navigation live with the embedder.

pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::resident::{CivilStatus, Gender, Resident, ResidentId, VoterStatus};
pub use query::age::{age_on, calculate_age};
pub use query::filter::{
    distinct_puroks, filter, search, FlagFilter, HouseholdRole, ResidentFilter,
};
pub use query::stats::{
    aggregate_stats, household_count, recent, GenderBreakdown, ResidentStats,
};
pub use service::resident_service::{
    ResidentInput, ResidentService, ServiceError, ServiceResult, ValidationError,
    MAX_PHOTO_SOURCE_BYTES,
};
pub use store::{
    BackendError, BackendResult, JsonFileBackend, MemoryBackend, ResidentStore,
    SqliteKvBackend, StorageBackend, StoreError, StoreResult, STORAGE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
