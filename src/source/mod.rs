//! Record sources feeding the pipeline.
//!
//! The pipeline never cares where records come from. Sources implement
//! [`RecordSource`]: a seeded sample generator for demos and a JSON file
//! loader for real data.

pub mod file;
pub mod generator;

use crate::parser::TransactionRecord;
use crate::utils::error::ParseError;

pub use file::{read_records, JsonFileSource};
pub use generator::SampleGenerator;

/// Anything that can supply the record store
pub trait RecordSource {
    /// Produce the full, ordered record store
    fn load_records(&self) -> Result<Vec<TransactionRecord>, ParseError>;

    /// Short description for log output
    fn describe(&self) -> String;
}
