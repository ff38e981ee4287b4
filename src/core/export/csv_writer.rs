//! CSV report writer
//!
//! Writes the header followed by one record per row. The target file is
//! created or truncated in place; a failure part-way leaves a truncated file.

use crate::domain::{Result, RiderRow, COLUMNS};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for the report produced on `date`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("riders_{}.csv", date.format("%Y-%m-%d"))
}

/// Full report path inside `directory` for `date`
pub fn report_path(directory: &Path, date: NaiveDate) -> PathBuf {
    directory.join(report_file_name(date))
}

/// Write `rows` to `path` as CSV, header first
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// Returns an I/O or CSV error if the directory or file cannot be created or
/// a record cannot be written.
pub fn write_report(path: &Path, rows: &[RiderRow]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row.as_record())?;
    }
    writer.flush()?;

    tracing::info!(rows = rows.len(), "Data successfully saved to {}", path.display());

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(id: &str, address: &str) -> RiderRow {
        RiderRow {
            registration_number: id.to_string(),
            first_name: "Ada".to_string(),
            mailing_address: address.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_report_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(report_file_name(date), "riders_2024-03-07.csv");
        assert_eq!(
            report_path(Path::new("out"), date),
            PathBuf::from("out/riders_2024-03-07.csv")
        );
    }

    #[test]
    fn test_header_and_rows_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("riders.csv");

        let written = write_report(&path, &[row("1", "Main St"), row("2", "")]).unwrap();
        assert_eq!(written, 2);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Registration Number,First Name,Last Name,Telephone,Telephone Ext,Email,Mailing Address,City/Town,Province/State,Postal/Zip Code"
        );
        assert_eq!(lines[1], "1,Ada,,,,,Main St,,,");
        assert_eq!(lines[2], "2,Ada,,,,,,,,");
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("riders.csv");

        write_report(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_quoting_of_commas_and_quotes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("riders.csv");

        write_report(&path, &[row("1", "5-12 King St, \"Rear\"")]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[6], "5-12 King St, \"Rear\"");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("riders.csv");

        write_report(&path, &[row("1", "a"), row("2", "b"), row("3", "c")]).unwrap();
        write_report(&path, &[row("9", "z")]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("9,Ada"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports/daily/riders.csv");

        write_report(&path, &[row("1", "a")]).unwrap();
        assert!(path.exists());
    }
}
