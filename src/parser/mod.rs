//! Record parsing and schema definitions.
//!
//! This module handles:
//! - The transaction record model
//! - Parsing and validating raw JSON record files
//! - Defining the report output schema

pub mod record;
pub mod records;
pub mod schema;

// Re-export main types
pub use record::{MonthKey, Product, Region, TransactionRecord};
pub use records::{parse_date, parse_records};
pub use schema::{DashboardReport, FilterSummary, KpiSummary, MonthSales, ProductSales, RecordPoint};
