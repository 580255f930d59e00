//! Typed extraction of calculator form submissions.
//!
//! The calculator form is a flat key space. Each appliance contributes four
//! fields sharing a suffix:
//! - `dispositivo_<name>` marks the appliance (its value is ignored)
//! - `consumo_<name>` unit power in watts
//! - `cantidad_<name>` integer quantity
//! - `horas_uso_<name>` daily hours of use
//!
//! plus a single `location` field. Appliances keep the order in which their
//! `dispositivo_` keys appear.

use std::collections::HashMap;

use crate::error::SizingError;
use crate::io::appliances::check_entries;
use crate::sizing::demand::ApplianceEntry;

const DEVICE_PREFIX: &str = "dispositivo_";
const POWER_PREFIX: &str = "consumo_";
const QUANTITY_PREFIX: &str = "cantidad_";
const HOURS_PREFIX: &str = "horas_uso_";
const LOCATION_FIELD: &str = "location";
const PANEL_COUNT_FIELD: &str = "num_paneles";

/// A parsed calculator submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationForm {
    pub location: String,
    pub appliances: Vec<ApplianceEntry>,
}

/// Builds a [`CalculationForm`] from raw form pairs.
///
/// # Errors
///
/// Returns `SizingError::InvalidInput` if `location` or any appliance field is
/// missing, a number does not parse, a value is negative, or a name repeats.
pub fn parse_calculation(pairs: &[(String, String)]) -> Result<CalculationForm, SizingError> {
    let fields = index_fields(pairs);

    let location = fields
        .get(LOCATION_FIELD)
        .ok_or_else(|| SizingError::invalid_input(format!("missing field `{LOCATION_FIELD}`")))?
        .to_string();

    let mut appliances = Vec::new();
    for (key, _) in pairs {
        let Some(name) = key.strip_prefix(DEVICE_PREFIX) else {
            continue;
        };
        appliances.push(ApplianceEntry {
            name: name.to_string(),
            unit_power_watts: number_field(&fields, POWER_PREFIX, name)?,
            quantity: quantity_field(&fields, name)?,
            daily_hours: number_field(&fields, HOURS_PREFIX, name)?,
        });
    }
    check_entries(&appliances)?;

    Ok(CalculationForm {
        location,
        appliances,
    })
}

/// Reads the `num_paneles` field of a diagram request.
///
/// # Errors
///
/// Returns `SizingError::InvalidInput` if the field is absent or not an integer.
pub fn parse_panel_count(pairs: &[(String, String)]) -> Result<i64, SizingError> {
    let fields = index_fields(pairs);
    panel_count_value(PANEL_COUNT_FIELD, fields.get(PANEL_COUNT_FIELD).copied())
}

/// Parses an optional raw panel count submitted under `field`.
///
/// # Errors
///
/// Returns `SizingError::InvalidInput` if `raw` is `None` or not an integer.
pub fn panel_count_value(field: &str, raw: Option<&str>) -> Result<i64, SizingError> {
    let raw = raw.ok_or_else(|| SizingError::invalid_input(format!("missing field `{field}`")))?;
    raw.trim().parse::<i64>().map_err(|_| {
        SizingError::invalid_input(format!("`{field}` must be an integer, got \"{raw}\""))
    })
}

/// First value wins for repeated keys.
fn index_fields(pairs: &[(String, String)]) -> HashMap<&str, &str> {
    let mut fields = HashMap::with_capacity(pairs.len());
    for (k, v) in pairs {
        fields.entry(k.as_str()).or_insert(v.as_str());
    }
    fields
}

fn raw_field<'a>(
    fields: &HashMap<&str, &'a str>,
    prefix: &str,
    name: &str,
) -> Result<(String, &'a str), SizingError> {
    let key = format!("{prefix}{name}");
    match fields.get(key.as_str()) {
        Some(&v) => Ok((key, v.trim())),
        None => Err(SizingError::invalid_input(format!("missing field `{key}`"))),
    }
}

fn number_field(
    fields: &HashMap<&str, &str>,
    prefix: &str,
    name: &str,
) -> Result<f64, SizingError> {
    let (key, raw) = raw_field(fields, prefix, name)?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(SizingError::invalid_input(format!(
            "`{key}` must be a non-negative number, got \"{raw}\""
        ))),
    }
}

fn quantity_field(fields: &HashMap<&str, &str>, name: &str) -> Result<u32, SizingError> {
    let (key, raw) = raw_field(fields, QUANTITY_PREFIX, name)?;
    raw.parse::<u32>().map_err(|_| {
        SizingError::invalid_input(format!(
            "`{key}` must be a non-negative integer, got \"{raw}\""
        ))
    })
}
