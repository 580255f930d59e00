//! CSV import of appliance lists and CSV export of per-appliance breakdowns.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::SizingError;
use crate::sizing::demand::ApplianceEntry;
use crate::sizing::report::SizingReport;

/// Column header for the breakdown export.
const BREAKDOWN_HEADER: &str = "name,unit_power_watts,quantity,daily_hours,energy_kwh";

/// Loads appliance entries from a CSV file.
///
/// Expected columns: `name,unit_power_watts,quantity,daily_hours`.
///
/// # Errors
///
/// Returns `SizingError::Io` if the file cannot be opened, or
/// `SizingError::InvalidInput` if a row is malformed or fails validation.
pub fn load_appliances(path: &Path) -> Result<Vec<ApplianceEntry>, SizingError> {
    let file = File::open(path)?;
    read_appliances(file)
}

/// Reads appliance entries as CSV from any reader and validates them.
///
/// # Errors
///
/// Returns `SizingError::InvalidInput` naming the offending row.
pub fn read_appliances(reader: impl Read) -> Result<Vec<ApplianceEntry>, SizingError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = Vec::new();
    for (i, row) in rdr.deserialize::<ApplianceEntry>().enumerate() {
        // Row 1 is the header.
        let entry = row.map_err(|e| SizingError::invalid_input(format!("row {}: {e}", i + 2)))?;
        entries.push(entry);
    }
    check_entries(&entries)?;
    Ok(entries)
}

/// Guards the estimator against values it does not handle.
///
/// Names must be non-empty and unique; power and hours must be finite and
/// non-negative. Zero is allowed everywhere.
///
/// # Errors
///
/// Returns `SizingError::InvalidInput` for the first offending entry.
pub fn check_entries(entries: &[ApplianceEntry]) -> Result<(), SizingError> {
    let mut seen = HashSet::new();
    for e in entries {
        if e.name.trim().is_empty() {
            return Err(SizingError::invalid_input("appliance name must not be empty"));
        }
        if !seen.insert(e.name.as_str()) {
            return Err(SizingError::invalid_input(format!(
                "duplicate appliance name \"{}\"",
                e.name
            )));
        }
        if !e.unit_power_watts.is_finite() || e.unit_power_watts < 0.0 {
            return Err(SizingError::invalid_input(format!(
                "\"{}\": power must be a non-negative number of watts",
                e.name
            )));
        }
        if !e.daily_hours.is_finite() || e.daily_hours < 0.0 {
            return Err(SizingError::invalid_input(format!(
                "\"{}\": daily hours must be a non-negative number",
                e.name
            )));
        }
    }
    Ok(())
}

/// Exports the per-appliance breakdown of a report to a CSV file.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_breakdown(report: &SizingReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_breakdown(report, buf)
}

/// Writes the per-appliance breakdown as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_breakdown(report: &SizingReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(BREAKDOWN_HEADER.split(','))?;

    for a in &report.appliances {
        wtr.write_record(&[
            a.entry.name.clone(),
            format!("{:.2}", a.entry.unit_power_watts),
            a.entry.quantity.to_string(),
            format!("{:.2}", a.entry.daily_hours),
            format!("{:.4}", a.energy_kwh),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::panel::PanelModel;
    use crate::sizing::report::calculate;

    #[test]
    fn reads_valid_csv() {
        let data = "name,unit_power_watts,quantity,daily_hours\n\
                    tv, 100, 2, 5\n\
                    fridge,150,1,24\n";
        let entries = read_appliances(data.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ApplianceEntry::new("tv", 100.0, 2, 5.0));
        assert_eq!(entries[1].name, "fridge");
    }

    #[test]
    fn non_numeric_field_names_row() {
        let data = "name,unit_power_watts,quantity,daily_hours\n\
                    tv,100,2,5\n\
                    lamp,lots,1,3\n";
        let err = read_appliances(data.as_bytes()).unwrap_err();
        match err {
            SizingError::InvalidInput(msg) => assert!(msg.contains("row 3"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let data = "name,unit_power_watts,quantity,daily_hours\ntv,100,-2,5\n";
        assert!(matches!(
            read_appliances(data.as_bytes()),
            Err(SizingError::InvalidInput(_))
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let entries = vec![
            ApplianceEntry::new("tv", 100.0, 1, 1.0),
            ApplianceEntry::new("tv", 80.0, 1, 2.0),
        ];
        assert!(check_entries(&entries).is_err());
    }

    #[test]
    fn negative_hours_are_rejected() {
        let entries = vec![ApplianceEntry::new("tv", 100.0, 1, -1.0)];
        assert!(check_entries(&entries).is_err());
    }

    #[test]
    fn breakdown_has_header_and_one_row_per_appliance() {
        let report = calculate(
            "here",
            vec![
                ApplianceEntry::new("tv", 100.0, 2, 5.0),
                ApplianceEntry::new("fridge", 150.0, 1, 24.0),
            ],
            &PanelModel::default(),
        )
        .unwrap();

        let mut buf = Vec::new();
        write_breakdown(&report, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], BREAKDOWN_HEADER);
        assert_eq!(lines[1], "tv,100.00,2,5.00,1.0000");
    }
}
