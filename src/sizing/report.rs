//! Result bundle combining demand estimation and panel sizing.

use std::fmt;

use serde::Serialize;

use super::demand::{ApplianceEntry, estimate_demand};
use super::panel::{PanelModel, size_panels};
use crate::error::SizingError;

/// One appliance together with its daily energy share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceBreakdown {
    #[serde(flatten)]
    pub entry: ApplianceEntry,
    /// Daily energy of this appliance (kWh).
    pub energy_kwh: f64,
}

impl From<ApplianceEntry> for ApplianceBreakdown {
    fn from(entry: ApplianceEntry) -> Self {
        let energy_kwh = entry.energy_kwh();
        Self { entry, energy_kwh }
    }
}

/// Everything the result page shows for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingReport {
    /// Free-text location, passed through untouched.
    pub location: String,
    pub appliances: Vec<ApplianceBreakdown>,
    /// Daily energy demand (kWh).
    pub total_kwh: f64,
    /// Capped output per panel (kW).
    pub rated_power_kw: f64,
    pub panel_count: u64,
}

/// Estimates demand for `appliances` and sizes the panel array for it.
///
/// # Arguments
///
/// * `location` - Opaque location label
/// * `appliances` - Validated appliance entries
/// * `model` - Panel model used for sizing
///
/// # Errors
///
/// Propagates `SizingError::InvalidConfiguration` from the panel sizer.
pub fn calculate(
    location: impl Into<String>,
    appliances: Vec<ApplianceEntry>,
    model: &PanelModel,
) -> Result<SizingReport, SizingError> {
    let demand = estimate_demand(&appliances);
    let sizing = size_panels(demand.total_kwh, model)?;
    Ok(SizingReport {
        location: location.into(),
        appliances: appliances.into_iter().map(ApplianceBreakdown::from).collect(),
        total_kwh: demand.total_kwh,
        rated_power_kw: sizing.rated_power_kw,
        panel_count: sizing.panel_count,
    })
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Solar Sizing Report ---")?;
        writeln!(f, "Location:          {}", self.location)?;
        for a in &self.appliances {
            writeln!(
                f,
                "  {:<16} {:>8.1} W x {:<3} {:>5.2} h/day  {:>8.3} kWh",
                a.entry.name,
                a.entry.unit_power_watts,
                a.entry.quantity,
                a.entry.daily_hours,
                a.energy_kwh
            )?;
        }
        writeln!(f, "Daily demand:      {:.3} kWh", self.total_kwh)?;
        writeln!(f, "Rated panel power: {:.3} kW", self.rated_power_kw)?;
        write!(f, "Panels required:   {}", self.panel_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_demand_and_sizing() {
        let report = calculate(
            "Lima",
            vec![ApplianceEntry::new("tv", 100.0, 2, 5.0)],
            &PanelModel::default(),
        )
        .unwrap();

        assert_eq!(report.location, "Lima");
        assert_eq!(report.appliances.len(), 1);
        assert!((report.appliances[0].energy_kwh - 1.0).abs() < 1e-12);
        assert!((report.total_kwh - 1.0).abs() < 1e-12);
        assert_eq!(report.rated_power_kw, 0.55);
        assert_eq!(report.panel_count, 2);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let report = calculate(
            "",
            vec![
                ApplianceEntry::new("fridge", 150.0, 1, 24.0),
                ApplianceEntry::new("bulb", 10.0, 8, 6.0),
            ],
            &PanelModel::default(),
        )
        .unwrap();
        let sum: f64 = report.appliances.iter().map(|a| a.energy_kwh).sum();
        assert!((sum - report.total_kwh).abs() < 1e-9);
    }

    #[test]
    fn invalid_model_propagates() {
        let err = calculate("x", vec![], &PanelModel::with_max_power(0.0)).unwrap_err();
        assert!(matches!(err, SizingError::InvalidConfiguration(_)));
    }

    #[test]
    fn display_lists_totals() {
        let report = calculate(
            "Quito",
            vec![ApplianceEntry::new("tv", 100.0, 2, 5.0)],
            &PanelModel::default(),
        )
        .unwrap();
        let text = report.to_string();
        assert!(text.contains("Quito"));
        assert!(text.contains("Daily demand:      1.000 kWh"));
        assert!(text.contains("Panels required:   2"));
    }
}
