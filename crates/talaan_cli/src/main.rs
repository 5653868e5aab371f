//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `talaan_core` linkage.
//! - Print registry statistics for a JSON-file store.

use talaan_core::{JsonFileBackend, ResidentService, ResidentStore};

fn main() {
    // Why: a tiny probe validates core crate wiring independently from any
    // embedding UI runtime.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "residents.json".to_string());

    let service = ResidentService::new(ResidentStore::new(JsonFileBackend::new(&path)));
    let stats = service.stats();

    println!("talaan_core version={}", talaan_core::core_version());
    println!(
        "store={path} residents={} households={} voters_registered={}",
        stats.total, stats.household_count, stats.voters_registered
    );
}
