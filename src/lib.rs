//! Household solar panel sizing: demand estimation, panel count, and wiring diagrams.

/// Web front end (HTML form and JSON endpoints).
#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod error;
/// CSV appliance lists and static diagram resources.
pub mod io;
pub mod sizing;
pub mod telemetry;

pub use error::SizingError;
