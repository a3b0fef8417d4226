//! Full pipeline: filter the record store, then run every aggregation.

use super::filter::{apply_filter, FilterSelection};
use super::metrics::{calculate_kpis, sales_by_month, sales_by_product, Kpis};
use crate::parser::schema::{
    DashboardReport, FilterSummary, KpiSummary, MonthSales, ProductSales, RecordPoint,
};
use crate::parser::{MonthKey, Product, TransactionRecord};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use log::debug;
use std::collections::BTreeMap;

/// Everything the dashboard displays for one filter selection
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// Selection the data was computed for
    pub selection: FilterSelection,

    pub kpis: Kpis,

    pub sales_by_product: BTreeMap<Product, f64>,

    /// Chronologically ordered month totals
    pub sales_by_month: BTreeMap<MonthKey, f64>,

    /// Records that passed the filter, in store order
    pub filtered: Vec<TransactionRecord>,
}

/// Run the filter and aggregation stages
///
/// **Public** - main entry point for the pipeline
///
/// Pure: the result depends only on `records` and `selection`.
pub fn build_dashboard(
    records: &[TransactionRecord],
    selection: &FilterSelection,
) -> DashboardData {
    let filtered = apply_filter(records, selection);

    let kpis = calculate_kpis(filtered.iter().copied());
    let by_product = sales_by_product(filtered.iter().copied());
    let by_month = sales_by_month(filtered.iter().copied());

    debug!("Dashboard: {}", kpis.summary());

    DashboardData {
        selection: selection.clone(),
        kpis,
        sales_by_product: by_product,
        sales_by_month: by_month,
        filtered: filtered.into_iter().cloned().collect(),
    }
}

/// Convert dashboard data into the versioned report schema
///
/// **Public** - used by the report command before writing JSON
pub fn to_report(data: &DashboardData, include_points: bool) -> DashboardReport {
    let points = include_points.then(|| {
        data.filtered
            .iter()
            .map(|r| RecordPoint {
                date: r.date,
                product: r.product,
                region: r.region,
                sales: r.sales,
                profit: r.profit,
            })
            .collect()
    });

    DashboardReport {
        version: SCHEMA_VERSION.to_string(),
        filters: FilterSummary {
            regions: data.selection.regions.iter().copied().collect(),
            products: data.selection.products.iter().copied().collect(),
        },
        kpis: KpiSummary {
            total_sales: data.kpis.total_sales,
            average_profit: data.kpis.average_profit,
            transaction_count: data.kpis.transaction_count,
        },
        sales_by_product: data
            .sales_by_product
            .iter()
            .map(|(product, sales)| ProductSales {
                product: *product,
                sales: *sales,
            })
            .collect(),
        sales_by_month: data
            .sales_by_month
            .iter()
            .map(|(month, sales)| MonthSales {
                month: *month,
                sales: *sales,
            })
            .collect(),
        points,
        generated_at: Utc::now().to_rfc3339(),
    }
}
