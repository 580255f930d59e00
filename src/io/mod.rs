//! File-backed inputs and outputs around the sizing core.

pub mod appliances;
/// Static wiring diagram lookup.
pub mod diagrams;

pub use appliances::{check_entries, export_breakdown, load_appliances, read_appliances};
pub use diagrams::{DiagramStore, DirectoryStore};
