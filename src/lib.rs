//! Northwind Reports - reporting queries over a bundled sales dataset
//!
//! Provides:
//! - Dataset loading (bundled JSON, or a JSON/YAML file)
//! - Ten pure queries filtering, joining, grouping and aggregating the data
//! - Text rendering of query rows into report sinks
//! - An explicit registry and runner for the report exercises

pub mod config;
pub mod dataset;
pub mod models;
pub mod query;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use config::{ConfigError, PriceBands, ReportConfig, ReportConfigBuilder};
pub use dataset::{Dataset, DatasetError, DatasetResult};
pub use models::{Customer, Order, Product, Supplier};
pub use report::{BufferSink, Render, ReportSink, StdoutSink, WriterSink, stdout_sink};
pub use runner::{Exercise, ExerciseId, Registry, Runner, RunnerError};
