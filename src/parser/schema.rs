//! Output JSON schema definitions for dashboard reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use super::record::{MonthKey, Product, Region};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Filter selection the report was computed for
    pub filters: FilterSummary,

    /// Headline metrics
    pub kpis: KpiSummary,

    /// Bar chart table: total sales per product present in the selection
    pub sales_by_product: Vec<ProductSales>,

    /// Trend table: total sales per month, oldest first
    pub sales_by_month: Vec<MonthSales>,

    /// Filtered records for the sales-vs-profit scatter (if requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<RecordPoint>>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Regions and products the report was filtered on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub regions: Vec<Region>,
    pub products: Vec<Product>,
}

/// Key performance indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_sales: f64,

    /// `null` when no transaction matched the filters
    pub average_profit: Option<f64>,

    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product: Product,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSales {
    /// Month formatted as `YYYY-MM`
    pub month: MonthKey,
    pub sales: f64,
}

/// One filtered transaction, as plotted on the scatter chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPoint {
    pub date: NaiveDate,
    pub product: Product,
    pub region: Region,
    pub sales: f64,
    pub profit: f64,
}
