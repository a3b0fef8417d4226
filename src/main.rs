//! Sales Dashboard CLI
//!
//! Builds dashboard reports from sales transaction records.
//! Records come from a JSON file or from the seeded sample generator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sales_dashboard::commands::{
    display_schema, display_version, execute_generate, execute_report, validate_args,
    validate_generate_args, validate_report_file, GenerateArgs, ReportArgs,
};
use sales_dashboard::utils::config::{
    DEFAULT_RECORDS_PATH, DEFAULT_REPORT_PATH, DEFAULT_ROW_COUNT, DEFAULT_SEED,
};

/// Sales Dashboard - KPIs and chart tables from sales transactions
#[derive(Parser, Debug)]
#[command(name = "sales-dashboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter records and write a dashboard report
    Report {
        /// JSON record file (omit to use generated sample data)
        #[arg(short, long, env = "SALES_DASHBOARD_INPUT")]
        input: Option<PathBuf>,

        /// Seed for generated sample data
        #[arg(long, env = "SALES_DASHBOARD_SEED", default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Number of generated sample rows
        #[arg(long, default_value_t = DEFAULT_ROW_COUNT)]
        rows: usize,

        /// Regions to include (repeat or comma separate; default: all)
        #[arg(long = "region", value_delimiter = ',', num_args = 0..)]
        regions: Option<Vec<String>>,

        /// Products to include (repeat or comma separate; default: all)
        #[arg(long = "product", value_delimiter = ',', num_args = 0..)]
        products: Option<Vec<String>>,

        /// Output path for JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Include filtered records (sales vs profit points) in the report
        #[arg(long)]
        points: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Write seeded sample records to a JSON file
    Generate {
        /// Random seed
        #[arg(long, env = "SALES_DASHBOARD_SEED", default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Number of rows
        #[arg(long, default_value_t = DEFAULT_ROW_COUNT)]
        rows: usize,

        /// Output path for the record file
        #[arg(short, long, default_value = DEFAULT_RECORDS_PATH)]
        output: PathBuf,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            input,
            seed,
            rows,
            regions,
            products,
            output,
            points,
            summary,
        } => {
            let args = ReportArgs {
                input,
                seed,
                rows,
                regions,
                products,
                output_json: output,
                include_points: points,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Generate { seed, rows, output } => {
            let args = GenerateArgs { seed, rows, output };
            validate_generate_args(&args)?;
            execute_generate(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
