//! Configuration and constants for the CLI.

use chrono::NaiveDate;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default output path for the dashboard report
pub const DEFAULT_REPORT_PATH: &str = "dashboard.json";

/// Default output path for generated records
pub const DEFAULT_RECORDS_PATH: &str = "records.json";

// Sample generator defaults
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROW_COUNT: usize = 500;
pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("default start date is not a valid calendar date"),
};
pub const DEFAULT_DAY_SPAN: u32 = 366;
pub const SALES_RANGE: (f64, f64) = (100.0, 2000.0);
pub const PROFIT_RANGE: (f64, f64) = (-300.0, 800.0);

/// Upper bound on generated rows accepted from the command line
pub const MAX_ROW_COUNT: usize = 1_000_000;

/// Width of the bar column in the text summary
pub const SUMMARY_BAR_WIDTH: usize = 40;

// Field names that may hold the row array in a record file
pub const RECORD_LIST_FIELD_NAMES: &[&str] = &["records", "transactions", "data", "rows"];
