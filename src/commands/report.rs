//! Report command implementation.
//!
//! The report command:
//! 1. Loads the record store (file or sample generator)
//! 2. Filters and aggregates it
//! 3. Writes the JSON report
//! 4. Optionally prints a text summary

use super::models::ReportArgs;
use crate::aggregator::{build_dashboard, to_report, DashboardData, FilterSelection};
use crate::output::{format_summary, validate_path, write_report};
use crate::parser::{Product, Region};
use crate::utils::config::MAX_ROW_COUNT;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The computed dashboard data, after the report has been written
///
/// # Errors
/// * Record loading or validation failures
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<DashboardData> {
    let start_time = Instant::now();

    // Step 1: Load records
    let source = args.record_source();
    info!("Step 1/4: Loading records from {}...", source.describe());
    let records = source
        .load_records()
        .with_context(|| format!("Failed to load records from {}", source.describe()))?;

    debug!("Record store holds {} records", records.len());

    // Step 2: Filter and aggregate
    info!("Step 2/4: Filtering and aggregating...");
    let selection = build_selection(&args);
    let data = build_dashboard(&records, &selection);

    info!("{}", data.kpis.summary());

    // Step 3: Write report
    info!("Step 3/4: Writing report...");
    let report = to_report(&data, args.include_points);
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    // Step 4: Print text summary (if requested)
    if args.print_summary {
        info!("Step 4/4: Printing summary...");
        println!("\n{}", "=".repeat(80));
        println!("SALES PERFORMANCE DASHBOARD");
        println!("{}", "=".repeat(80));
        println!("{}", format_summary(&data));
        println!("{}", "=".repeat(80));
    } else {
        info!("Step 4/4: Skipping summary (not requested)");
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(data)
}

/// Turn label arguments into a filter selection
///
/// **Public** - absent label lists select everything, present but empty
/// lists select nothing
pub fn build_selection(args: &ReportArgs) -> FilterSelection {
    let all = FilterSelection::all();

    let regions = match &args.regions {
        Some(labels) => {
            FilterSelection::from_labels(labels.iter().map(String::as_str), std::iter::empty())
                .regions
        }
        None => all.regions,
    };
    let products = match &args.products {
        Some(labels) => {
            FilterSelection::from_labels(std::iter::empty(), labels.iter().map(String::as_str))
                .products
        }
        None => all.products,
    };

    FilterSelection { regions, products }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    validate_path(&args.output_json).context("Invalid report output path")?;

    if let Some(input) = &args.input {
        if !input.is_file() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
    } else {
        if args.rows == 0 {
            anyhow::bail!("rows must be greater than 0");
        }

        if args.rows > MAX_ROW_COUNT {
            anyhow::bail!("rows is too large (max {})", MAX_ROW_COUNT);
        }
    }

    Ok(())
}

/// Labels of every known region, for help output
pub fn region_labels() -> Vec<&'static str> {
    Region::ALL.iter().map(|r| r.label()).collect()
}

/// Labels of every known product, for help output
pub fn product_labels() -> Vec<&'static str> {
    Product::ALL.iter().map(|p| p.label()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_defaults() {
        assert!(validate_args(&ReportArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_zero_rows() {
        let args = ReportArgs {
            rows: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_too_many_rows() {
        let args = ReportArgs {
            rows: MAX_ROW_COUNT + 1,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = ReportArgs {
            input: Some(PathBuf::from("/no/such/records.json")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = ReportArgs {
            output_json: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_build_selection_defaults_to_all() {
        assert_eq!(build_selection(&ReportArgs::default()), FilterSelection::all());
    }

    #[test]
    fn test_build_selection_explicit_empty() {
        let args = ReportArgs {
            products: Some(vec![]),
            ..Default::default()
        };
        let selection = build_selection(&args);

        assert_eq!(selection.regions.len(), Region::ALL.len());
        assert!(selection.products.is_empty());
    }

    #[test]
    fn test_build_selection_labels() {
        let args = ReportArgs {
            regions: Some(vec!["North".to_string(), "Atlantis".to_string()]),
            products: Some(vec!["laptop".to_string()]),
            ..Default::default()
        };

        assert_eq!(
            build_selection(&args),
            FilterSelection::new([Region::North], [Product::Laptop])
        );
    }

    #[test]
    fn test_known_labels() {
        assert_eq!(region_labels(), vec!["North", "South", "East", "West"]);
        assert_eq!(product_labels(), vec!["Laptop", "Mouse", "Monitor", "Keyboard"]);
    }
}
