//! Use-case services consumed by presentation layers.
//!
//! # Responsibility
//! - Orchestrate store and query calls into the registry's operation set.
//! - Keep embedding UIs decoupled from storage details.

pub mod resident_service;
