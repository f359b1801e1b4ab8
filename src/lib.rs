//! Bench Viz - charts and summaries for student database benchmarks
//!
//! This library turns the CSV output of the database and sorting benchmarks
//! into PNG figures and console summaries.
//!
//! # Architecture
//!
//! - **Records**: CSV loading and header validation
//! - **Variants**: Display colors and labels of the compared implementations
//! - **Metrics**: Grouping, efficiency and speedup calculations
//! - **Visualization**: plotters-based figures with log-scaled axes
//! - **Report**: Console summaries
//! - **Runner**: Orchestrates the reports
//!
//! # Example
//!
//! ```rust,no_run
//! use bench_viz::runner::{BenchmarkReport, Report};
//! use std::path::Path;
//!
//! fn main() -> bench_viz::Result<()> {
//!     let report = BenchmarkReport::new("build/benchmark_results.csv");
//!     let outcome = report.run(Path::new("."), 300)?;
//!     println!("{}", outcome.summary);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod records;
pub mod report;
pub mod runner;
pub mod variants;
pub mod visualization;

// Re-export commonly used types
pub use config::{ReportConfig, ReportSelection};
pub use error::{Error, Result};
pub use metrics::{BenchmarkTable, Metric, Speedup};
pub use records::{BenchmarkRecord, SortRecord};
pub use runner::{BenchmarkReport, Report, ReportOutcome, ReportRunner, SortReport};
pub use variants::VariantMeta;
pub use visualization::{BenchmarkPlotter, SortPlotter};
