//! Sales Dashboard
//!
//! Filters sales transactions by region and product and aggregates them
//! into dashboard KPIs and chart-ready tables.
//!
//! The pipeline is a pure function of the record store and a filter
//! selection:
//!
//! ```ignore
//! use sales_dashboard::aggregator::{build_dashboard, FilterSelection};
//! use sales_dashboard::source::{RecordSource, SampleGenerator};
//!
//! let records = SampleGenerator::new().load_records()?;
//! let data = build_dashboard(&records, &FilterSelection::all());
//! println!("{}", data.kpis.summary());
//! ```
//!
//! This crate also provides the `sales-dashboard` CLI.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod source;
pub mod utils;
