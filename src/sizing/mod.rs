//! Solar sizing core: demand estimation, panel sizing, and diagram selection.
//!
//! Everything here is pure and framework-free; parsing and resource lookup
//! live in [`crate::io`] and the `api` module.

/// Daily energy demand estimation.
pub mod demand;
pub mod diagram;
/// Panel model and panel count calculation.
pub mod panel;
pub mod report;

pub use demand::{ApplianceEntry, DemandResult, estimate_demand};
pub use diagram::{DiagramId, select_diagram};
pub use panel::{PanelModel, SizingResult, size_panels};
pub use report::{ApplianceBreakdown, SizingReport, calculate};
