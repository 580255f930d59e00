//! Daily energy demand from a list of household appliances.

use serde::{Deserialize, Serialize};

/// One user-declared device with its power draw and daily usage.
///
/// Entries are built per request by the caller and are expected to carry
/// non-negative values; the estimator does not validate them.
///
/// # Examples
///
/// ```
/// use solar_sizer::sizing::demand::ApplianceEntry;
///
/// let tv = ApplianceEntry::new("tv", 100.0, 2, 5.0);
/// assert_eq!(tv.energy_kwh(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceEntry {
    /// Identifier, unique within one request.
    pub name: String,
    /// Power draw of a single unit (W).
    pub unit_power_watts: f64,
    /// Number of identical units.
    pub quantity: u32,
    /// Hours of use per day.
    pub daily_hours: f64,
}

impl ApplianceEntry {
    pub fn new(
        name: impl Into<String>,
        unit_power_watts: f64,
        quantity: u32,
        daily_hours: f64,
    ) -> Self {
        Self {
            name: name.into(),
            unit_power_watts,
            quantity,
            daily_hours,
        }
    }

    /// Combined power draw of all units (kW).
    pub fn power_kw(&self) -> f64 {
        self.unit_power_watts * f64::from(self.quantity) / 1000.0
    }

    /// Daily energy consumed by all units (kWh).
    pub fn energy_kwh(&self) -> f64 {
        self.power_kw() * self.daily_hours
    }
}

/// Total daily energy demand (kWh).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandResult {
    pub total_kwh: f64,
}

/// Sums the daily energy of every appliance.
///
/// Returns zero for an empty slice. Pure and deterministic.
///
/// # Arguments
///
/// * `appliances` - Appliance entries in submission order
///
/// # Returns
///
/// A `DemandResult` holding the total daily energy in kWh.
pub fn estimate_demand(appliances: &[ApplianceEntry]) -> DemandResult {
    DemandResult {
        total_kwh: appliances.iter().map(ApplianceEntry::energy_kwh).sum(),
    }
}
