//! Calculate dashboard metrics from filtered transactions.
//!
//! Three independent views are derived from the same records:
//! - Scalar KPIs (total sales, average profit, transaction count)
//! - Sales totals per product (bar chart)
//! - Sales totals per month (trend line)
//!
//! Every function accepts any iterator of record references, so they work
//! on the full store and on the output of the filter stage alike.

use crate::parser::{MonthKey, Product, TransactionRecord};
use log::debug;
use std::collections::BTreeMap;

/// Headline metrics for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kpis {
    /// Sum of sales (0 when there are no records)
    pub total_sales: f64,

    /// Mean profit, `None` when there are no records
    pub average_profit: Option<f64>,

    /// Number of records
    pub transaction_count: usize,
}

impl Kpis {
    /// True when no transaction contributed to the metrics
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let average = match self.average_profit {
            Some(avg) => format!("{:.2}", avg),
            None => "n/a".to_string(),
        };
        format!(
            "Total sales: {:.2} | Average profit: {} | Transactions: {}",
            self.total_sales, average, self.transaction_count
        )
    }
}

/// Calculate the scalar KPIs
///
/// **Public** - main entry point for KPI calculation
pub fn calculate_kpis<'a, I>(records: I) -> Kpis
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut total_sales = 0.0;
    let mut total_profit = 0.0;
    let mut count = 0usize;

    for record in records {
        total_sales += record.sales;
        total_profit += record.profit;
        count += 1;
    }

    let average_profit = (count > 0).then(|| total_profit / count as f64);

    debug!("Calculated KPIs over {} records", count);

    Kpis {
        total_sales,
        average_profit,
        transaction_count: count,
    }
}

/// Sum sales per product
///
/// Only products that occur in `records` get an entry.
pub fn sales_by_product<'a, I>(records: I) -> BTreeMap<Product, f64>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut totals: BTreeMap<Product, f64> = BTreeMap::new();

    for record in records {
        *totals.entry(record.product).or_insert(0.0) += record.sales;
    }

    totals
}

/// Sum sales per calendar month
///
/// The map iterates in chronological order, which trend consumers rely on.
pub fn sales_by_month<'a, I>(records: I) -> BTreeMap<MonthKey, f64>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut totals: BTreeMap<MonthKey, f64> = BTreeMap::new();

    for record in records {
        *totals.entry(record.month()).or_insert(0.0) += record.sales;
    }

    debug!("Grouped sales into {} months", totals.len());

    totals
}
