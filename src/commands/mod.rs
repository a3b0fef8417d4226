//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod generate;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use generate::{execute_generate, validate_generate_args};
pub use models::{GenerateArgs, ReportArgs};
pub use report::{build_selection, execute_report, validate_args};
pub use utils::{display_schema, display_version, validate_report_file};
