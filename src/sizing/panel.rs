//! Per-panel output capacity and panel count for a given demand.

use serde::{Deserialize, Serialize};

use crate::error::SizingError;

/// Panel surface area (m²).
pub const DEFAULT_AREA_M2: f64 = 1.6;
/// Panel conversion efficiency (0.0 to 1.0).
pub const DEFAULT_EFFICIENCY: f64 = 0.15;
/// Average peak sun hours per day.
pub const DEFAULT_PEAK_SUN_HOURS: f64 = 5.0;
/// Cap applied to the nominal panel output (kW).
pub const DEFAULT_MAX_PANEL_POWER_KW: f64 = 0.55;

/// Fixed-wattage panel model.
///
/// The nominal output is `area_m2 * efficiency * peak_sun_hours`; the rated
/// output used for sizing is that value capped at `max_panel_power_kw`.
///
/// # Examples
///
/// ```
/// use solar_sizer::sizing::panel::PanelModel;
///
/// let model = PanelModel::default();
/// assert!((model.nominal_kw() - 1.2).abs() < 1e-9);
/// assert_eq!(model.rated_power_kw().unwrap(), 0.55);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelModel {
    /// Panel surface area (m²).
    pub area_m2: f64,
    /// Conversion efficiency.
    pub efficiency: f64,
    /// Peak sun hours per day.
    pub peak_sun_hours: f64,
    /// Upper bound on the rated output (kW).
    pub max_panel_power_kw: f64,
}

impl Default for PanelModel {
    fn default() -> Self {
        Self {
            area_m2: DEFAULT_AREA_M2,
            efficiency: DEFAULT_EFFICIENCY,
            peak_sun_hours: DEFAULT_PEAK_SUN_HOURS,
            max_panel_power_kw: DEFAULT_MAX_PANEL_POWER_KW,
        }
    }
}

impl PanelModel {
    /// Default physical constants with a different output cap.
    pub fn with_max_power(max_panel_power_kw: f64) -> Self {
        Self {
            max_panel_power_kw,
            ..Self::default()
        }
    }

    /// Uncapped panel output (kW).
    pub fn nominal_kw(&self) -> f64 {
        self.area_m2 * self.efficiency * self.peak_sun_hours
    }

    /// Capped panel output (kW) used for sizing.
    ///
    /// # Errors
    ///
    /// Returns `SizingError::InvalidConfiguration` if the capped output is
    /// not strictly positive, since sizing would divide by it.
    pub fn rated_power_kw(&self) -> Result<f64, SizingError> {
        let rated = self.nominal_kw().min(self.max_panel_power_kw);
        // NaN fails this comparison too.
        if !(rated > 0.0) {
            return Err(SizingError::InvalidConfiguration(format!(
                "rated panel power must be > 0 kW, got {rated} \
                 (nominal {:.3} kW, cap {} kW)",
                self.nominal_kw(),
                self.max_panel_power_kw
            )));
        }
        Ok(rated)
    }
}

/// Outcome of sizing a demand against a panel model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizingResult {
    /// Capped output per panel (kW).
    pub rated_power_kw: f64,
    /// Panels needed: `ceil(total_kwh / rated_power_kw)`.
    pub panel_count: u64,
}

/// Computes how many panels cover `total_kwh` of daily demand.
///
/// # Arguments
///
/// * `total_kwh` - Daily energy demand (kWh, >= 0)
/// * `model` - Panel model supplying the rated output
///
/// # Errors
///
/// * `SizingError::InvalidInput` if `total_kwh` is negative or not finite, or
///   needs more panels than fit in an `i64`
/// * `SizingError::InvalidConfiguration` if the rated output is <= 0
pub fn size_panels(total_kwh: f64, model: &PanelModel) -> Result<SizingResult, SizingError> {
    if !total_kwh.is_finite() || total_kwh < 0.0 {
        return Err(SizingError::invalid_input(format!(
            "total demand must be a finite, non-negative kWh value, got {total_kwh}"
        )));
    }
    let rated_power_kw = model.rated_power_kw()?;
    let panels = (total_kwh / rated_power_kw).ceil();
    // Counts must round-trip through the i64 diagram selector.
    if panels >= i64::MAX as f64 {
        return Err(SizingError::invalid_input(format!(
            "total demand of {total_kwh} kWh needs more panels than can be counted"
        )));
    }
    let panel_count = panels as u64;
    Ok(SizingResult {
        rated_power_kw,
        panel_count,
    })
}
