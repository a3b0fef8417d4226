//! JSON record file source.

use super::RecordSource;
use crate::parser::{parse_records, TransactionRecord};
use crate::utils::error::ParseError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Loads the record store from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load_records(&self) -> Result<Vec<TransactionRecord>, ParseError> {
        read_records(&self.path)
    }

    fn describe(&self) -> String {
        format!("record file {}", self.path.display())
    }
}

/// Read and validate records from a JSON file
///
/// **Public** - used by [`JsonFileSource`] and tests
///
/// # Errors
/// * `ParseError::ReadFailed` - file cannot be opened
/// * `ParseError::JsonError` - file is not valid JSON
/// * `ParseError::InvalidRecord` - a row fails validation
pub fn read_records(input_path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>, ParseError> {
    let input_path = input_path.as_ref();

    info!("Reading records from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    let records = parse_records(&raw)?;

    debug!("Loaded {} records", records.len());

    Ok(records)
}
