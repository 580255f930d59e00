//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solar_sizer::sizing::demand::ApplianceEntry;

/// Household used across scenarios: 5.08 kWh/day.
pub fn household() -> Vec<ApplianceEntry> {
    vec![
        ApplianceEntry::new("fridge", 150.0, 1, 24.0),
        ApplianceEntry::new("tv", 100.0, 2, 5.0),
        ApplianceEntry::new("bulb", 10.0, 8, 6.0),
    ]
}

/// Seeded RNG so property checks are reproducible.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Random non-negative appliance list with unique names.
pub fn random_appliances(rng: &mut StdRng) -> Vec<ApplianceEntry> {
    let n = rng.random_range(0..12);
    (0..n)
        .map(|i| {
            ApplianceEntry::new(
                format!("device{i}"),
                rng.random_range(0.0..3000.0),
                rng.random_range(0..6),
                rng.random_range(0.0..24.0),
            )
        })
        .collect()
}

/// Diagram resources shipped with the crate.
pub fn shipped_diagrams_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static/diagrams")
}
