//! Output writers for dashboard data.
//!
//! This module handles writing data to disk and the terminal:
//! - JSON reports and record files
//! - Text summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_path, write_records, write_report};
pub use text::{format_currency, format_summary};
