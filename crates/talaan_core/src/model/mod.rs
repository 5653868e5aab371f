//! Domain model for the resident registry.
//!
//! # Responsibility
//! - Define the canonical resident record and its enumerated attributes.
//! - Pin the persisted wire shape (camelCase field names, enum labels).
//!
//! # Invariants
//! - Every resident is identified by a stable `ResidentId`.
//! - Wire names stay compatible with the existing single-key JSON payload.

pub mod resident;
