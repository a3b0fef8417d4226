use crate::source::{JsonFileSource, RecordSource, SampleGenerator};
use crate::utils::config::{
    DEFAULT_RECORDS_PATH, DEFAULT_REPORT_PATH, DEFAULT_ROW_COUNT, DEFAULT_SEED,
};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// JSON record file (None = generate sample data)
    pub input: Option<PathBuf>,

    /// Seed for generated sample data
    pub seed: u64,

    /// Number of generated sample rows
    pub rows: usize,

    /// Region labels to keep (None = every region)
    pub regions: Option<Vec<String>>,

    /// Product labels to keep (None = every product)
    pub products: Option<Vec<String>>,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Include filtered records for the scatter chart
    pub include_points: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: None,
            seed: DEFAULT_SEED,
            rows: DEFAULT_ROW_COUNT,
            regions: None,
            products: None,
            output_json: PathBuf::from(DEFAULT_REPORT_PATH),
            include_points: false,
            print_summary: false,
        }
    }
}

impl ReportArgs {
    /// Record source selected by these arguments
    pub fn record_source(&self) -> Box<dyn RecordSource> {
        match &self.input {
            Some(path) => Box::new(JsonFileSource::new(path.clone())),
            None => Box::new(SampleGenerator::new().with_seed(self.seed).with_rows(self.rows)),
        }
    }
}

/// Arguments for the generate command
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub seed: u64,
    pub rows: usize,
    pub output: PathBuf,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rows: DEFAULT_ROW_COUNT,
            output: PathBuf::from(DEFAULT_RECORDS_PATH),
        }
    }
}
