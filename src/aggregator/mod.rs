//! Filtering and aggregation of transaction records.
//!
//! This module transforms the record store into:
//! - A filtered view for the chosen regions and products
//! - Scalar KPIs
//! - Per-product and per-month sales tables

pub mod dashboard;
pub mod filter;
pub mod metrics;

// Re-export main types and functions
pub use dashboard::{build_dashboard, to_report, DashboardData};
pub use filter::{apply_filter, FilterSelection};
pub use metrics::{calculate_kpis, sales_by_month, sales_by_product, Kpis};
