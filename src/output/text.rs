//! Plain-text dashboard summary for the terminal.
//!
//! Renders the KPI row followed by bar tables for sales per product and
//! sales per month.

use crate::aggregator::DashboardData;
use crate::utils::config::SUMMARY_BAR_WIDTH;

/// Render the dashboard as text
///
/// **Public** - printed by the report command with `--summary`
pub fn format_summary(data: &DashboardData) -> String {
    let mut lines = Vec::new();

    let regions: Vec<&str> = data.selection.regions.iter().map(|r| r.label()).collect();
    let products: Vec<&str> = data.selection.products.iter().map(|p| p.label()).collect();
    lines.push(format!("  Regions:  {}", join_or_none(&regions)));
    lines.push(format!("  Products: {}", join_or_none(&products)));
    lines.push(String::new());

    let average = data
        .kpis
        .average_profit
        .map(|avg| format_currency(avg, 2))
        .unwrap_or_else(|| "n/a".to_string());

    lines.push(format!(
        "  {:<20} {:<20} {:<20}",
        "Total Sales", "Average Profit", "Total Transactions"
    ));
    lines.push(format!(
        "  {:<20} {:<20} {:<20}",
        format_currency(data.kpis.total_sales, 0),
        average,
        data.kpis.transaction_count
    ));

    lines.push(String::new());
    lines.push("  SALES BY PRODUCT".to_string());
    let rows: Vec<(String, f64)> = data
        .sales_by_product
        .iter()
        .map(|(product, sales)| (product.to_string(), *sales))
        .collect();
    push_bar_table(&mut lines, &rows);

    lines.push(String::new());
    lines.push("  MONTHLY SALES TREND".to_string());
    let rows: Vec<(String, f64)> = data
        .sales_by_month
        .iter()
        .map(|(month, sales)| (month.to_string(), *sales))
        .collect();
    push_bar_table(&mut lines, &rows);

    lines.join("\n")
}

/// Append a labelled bar table, bars scaled to the largest value
///
/// **Private** - internal helper for format_summary
fn push_bar_table(lines: &mut Vec<String>, rows: &[(String, f64)]) {
    if rows.is_empty() {
        lines.push("  (no data)".to_string());
        return;
    }

    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    for (label, value) in rows {
        let width = if max > 0.0 {
            ((value / max) * SUMMARY_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        lines.push(format!(
            "  {:<10} {:<bar_width$} {:>14}",
            label,
            "█".repeat(width),
            format_currency(*value, 0),
            bar_width = SUMMARY_BAR_WIDTH
        ));
    }
}

fn join_or_none(labels: &[&str]) -> String {
    if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    }
}

/// Format an amount as dollars with thousands separators
///
/// `format_currency(1500.0, 0)` gives `$1,500`; negative amounts get a
/// leading minus sign.
pub fn format_currency(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(f) => format!("{}${}.{}", sign, grouped, f),
        None => format!("{}${}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{build_dashboard, FilterSelection};
    use crate::parser::{Product, Region, TransactionRecord};
    use chrono::NaiveDate;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1500.0, 0), "$1,500");
        assert_eq!(format_currency(150.0, 2), "$150.00");
        assert_eq!(format_currency(1234567.891, 2), "$1,234,567.89");
        assert_eq!(format_currency(-12.5, 2), "-$12.50");
        assert_eq!(format_currency(0.0, 0), "$0");
        assert_eq!(format_currency(-0.001, 2), "$0.00");
    }

    #[test]
    fn test_summary_contains_kpis_and_months() {
        let records = vec![
            TransactionRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                Product::Laptop,
                Region::North,
                1000.0,
                200.0,
            ),
            TransactionRecord::new(
                NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                Product::Laptop,
                Region::North,
                500.0,
                100.0,
            ),
        ];
        let data = build_dashboard(&records, &FilterSelection::all());

        let summary = format_summary(&data);

        assert!(summary.contains("$1,500"));
        assert!(summary.contains("$150.00"));
        assert!(summary.contains("2024-01"));
        assert!(summary.contains("2024-02"));
    }

    #[test]
    fn test_summary_empty_selection() {
        let data = build_dashboard(&[], &FilterSelection::default());
        let summary = format_summary(&data);

        assert!(summary.contains("n/a"));
        assert!(summary.contains("(no data)"));
        assert!(summary.contains("(none)"));
    }
}
