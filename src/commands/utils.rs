use super::report::{product_labels, region_labels};
use crate::output::{format_currency, read_report};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    let average = report
        .kpis
        .average_profit
        .map(|avg| format_currency(avg, 2))
        .unwrap_or_else(|| "n/a".to_string());

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Total Sales: {}", format_currency(report.kpis.total_sales, 0));
    println!("  Average Profit: {}", average);
    println!("  Transactions: {}", report.kpis.transaction_count);
    println!("  Products: {}", report.sales_by_product.len());
    println!("  Months: {}", report.sales_by_month.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Sales Dashboard Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  filters: object            - Selection the report covers");
        println!("    regions: array           - {}", region_labels().join(" | "));
        println!("    products: array          - {}", product_labels().join(" | "));
        println!("  kpis: object               - Headline metrics");
        println!("    total_sales: number      - Sum of sales");
        println!("    average_profit: number?  - Mean profit, null when nothing matched");
        println!("    transaction_count: number");
        println!("  sales_by_product: array    - {{ product, sales }}");
        println!("  sales_by_month: array      - {{ month: 'YYYY-MM', sales }}, oldest first");
        println!("  points: array?             - Filtered records (with --points)");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Sales Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Filters sales transactions and aggregates dashboard KPIs and chart tables.");
}
