//! Generate command implementation.
//!
//! Writes a seeded sample record file that `report --input` can read back.

use super::models::GenerateArgs;
use crate::output::{validate_path, write_records};
use crate::source::{RecordSource, SampleGenerator};
use crate::utils::config::MAX_ROW_COUNT;
use anyhow::{Context, Result};
use log::info;

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Number of records written
pub fn execute_generate(args: GenerateArgs) -> Result<usize> {
    let generator = SampleGenerator::new().with_seed(args.seed).with_rows(args.rows);

    let records = generator
        .load_records()
        .with_context(|| format!("Failed to run {}", generator.describe()))?;

    write_records(&records, &args.output).context("Failed to write record file")?;

    info!("✓ {} records written to: {}", records.len(), args.output.display());

    Ok(records.len())
}

/// Validate generate arguments
pub fn validate_generate_args(args: &GenerateArgs) -> Result<()> {
    validate_path(&args.output).context("Invalid record output path")?;

    if args.rows == 0 {
        anyhow::bail!("rows must be greater than 0");
    }

    if args.rows > MAX_ROW_COUNT {
        anyhow::bail!("rows is too large (max {})", MAX_ROW_COUNT);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::read_records;

    #[test]
    fn test_generate_then_read_back() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("records.json");
        let args = GenerateArgs {
            seed: 7,
            rows: 25,
            output: output.clone(),
        };

        assert!(validate_generate_args(&args).is_ok());
        assert_eq!(execute_generate(args).unwrap(), 25);

        let loaded = read_records(&output).unwrap();
        let expected = SampleGenerator::new().with_seed(7).with_rows(25).generate().unwrap();
        assert_eq!(loaded.len(), expected.len());
        assert_eq!(loaded[0].date, expected[0].date);
        assert_eq!(loaded[0].product, expected[0].product);
    }

    #[test]
    fn test_validate_generate_args_zero_rows() {
        let args = GenerateArgs {
            rows: 0,
            ..Default::default()
        };
        assert!(validate_generate_args(&args).is_err());
    }

    #[test]
    fn test_validate_generate_args_too_many_rows() {
        let args = GenerateArgs {
            rows: MAX_ROW_COUNT + 1,
            ..Default::default()
        };
        assert!(validate_generate_args(&args).is_err());
    }
}
