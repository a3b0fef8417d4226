//! JSON output writer.
//!
//! Writes dashboard reports and record files with proper formatting.

use crate::parser::schema::DashboardReport;
use crate::parser::TransactionRecord;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a dashboard report to a JSON file
///
/// **Public** - main entry point for report output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = to_report(&data, false);
/// write_report(&report, "dashboard.json")?;
/// ```
pub fn write_report(
    report: &DashboardReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_json(report, output_path.as_ref())
}

/// Write records in the record file format
///
/// **Public** - used by the generate command; the output can be fed back
/// through `JsonFileSource`
pub fn write_records(
    records: &[TransactionRecord],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_json(records, output_path.as_ref())
}

/// Serialize any value as pretty JSON to a file
///
/// **Private** - shared by the writers above
fn write_json<T: Serialize + ?Sized>(value: &T, output_path: &Path) -> Result<(), OutputError> {
    info!("Writing JSON to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    info!("Written successfully ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Validate that output path is writable
///
/// **Public** - commands check paths before doing any work
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<DashboardReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: DashboardReport = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report loaded: version {}, {} transactions",
        report.version, report.kpis.transaction_count
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{FilterSummary, KpiSummary, MonthSales, ProductSales};
    use crate::parser::{MonthKey, Product, Region};
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn create_test_report() -> DashboardReport {
        DashboardReport {
            version: "1.0.0".to_string(),
            filters: FilterSummary {
                regions: vec![Region::North],
                products: vec![Product::Laptop],
            },
            kpis: KpiSummary {
                total_sales: 1500.0,
                average_profit: Some(150.0),
                transaction_count: 2,
            },
            sales_by_product: vec![ProductSales {
                product: Product::Laptop,
                sales: 1500.0,
            }],
            sales_by_month: vec![
                MonthSales {
                    month: MonthKey::new(2024, 1).unwrap(),
                    sales: 1000.0,
                },
                MonthSales {
                    month: MonthKey::new(2024, 2).unwrap(),
                    sales: 500.0,
                },
            ],
            points: None,
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_report(&report, path).unwrap();
        let loaded = read_report(path).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_empty_average_written_as_null() {
        let mut report = create_test_report();
        report.kpis.average_profit = None;
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let text = std::fs::read_to_string(temp_file.path()).unwrap();

        assert!(text.contains("\"average_profit\": null"));
        assert!(!text.contains("points"));
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/dashboard.json");

        let report = create_test_report();
        write_report(&report, &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
