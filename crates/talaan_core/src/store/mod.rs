//! Resident store: injectable persistence plus whole-collection CRUD.
//!
//! # Responsibility
//! - Own the persisted representation of the resident collection.
//! - Keep storage-medium details behind the [`StorageBackend`] trait.
//!
//! # Invariants
//! - The collection is persisted as one JSON array under [`STORAGE_KEY`].
//! - Every mutation is a full read-modify-write of the collection; there
//!   is no per-record patch primitive.

mod backend;
mod json_file;
mod resident_store;
mod sqlite_kv;

pub use backend::{BackendError, BackendResult, MemoryBackend, StorageBackend};
pub use json_file::JsonFileBackend;
pub use resident_store::{ResidentStore, StoreError, StoreResult};
pub use sqlite_kv::SqliteKvBackend;

/// Logical key the serialized collection lives under.
pub const STORAGE_KEY: &str = "barangay_residents";
