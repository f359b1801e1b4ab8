//! Report orchestration
//!
//! Each report is a single pass:
//! - Load the CSV input
//! - Render the figure into the output directory
//! - Build the console summary

use crate::config::{ReportConfig, BENCHMARK_IMAGE, SORT_IMAGE};
use crate::error::{Error, Result};
use crate::metrics::BenchmarkTable;
use crate::records::{load_benchmark_records, load_sort_records};
use crate::report::{benchmark_summary, sort_summary};
use crate::visualization::{BenchmarkPlotter, SortPlotter};
use std::path::{Path, PathBuf};

/// What a finished report produced
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// Rendered image
    pub image: PathBuf,
    /// Console summary text
    pub summary: String,
}

/// A report generated from one CSV input
pub trait Report {
    /// Report name, for logging
    fn name(&self) -> &str;

    /// Load, render and summarize
    fn run(&self, output_dir: &Path, dpi: u32) -> Result<ReportOutcome>;
}

/// Database variant comparison
pub struct BenchmarkReport {
    input: PathBuf,
}

impl BenchmarkReport {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl Report for BenchmarkReport {
    fn name(&self) -> &str {
        "benchmark"
    }

    fn run(&self, output_dir: &Path, dpi: u32) -> Result<ReportOutcome> {
        let records = load_benchmark_records(&self.input)?;
        let table = BenchmarkTable::new(records)?;
        tracing::info!(
            "Loaded {} benchmark rows: {} variants, {} dataset sizes",
            table.len(),
            table.variants().len(),
            table.sizes().len()
        );

        let image = output_dir.join(BENCHMARK_IMAGE);
        BenchmarkPlotter::plot(&table, &image, dpi)?;

        Ok(ReportOutcome {
            image,
            summary: benchmark_summary(&table)?,
        })
    }
}

/// Standard sort vs radix sort comparison
pub struct SortReport {
    input: PathBuf,
}

impl SortReport {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl Report for SortReport {
    fn name(&self) -> &str {
        "sort"
    }

    fn run(&self, output_dir: &Path, dpi: u32) -> Result<ReportOutcome> {
        let records = load_sort_records(&self.input)?;
        tracing::info!("Loaded {} sort rows", records.len());

        let image = output_dir.join(SORT_IMAGE);
        SortPlotter::plot(&records, &image, dpi)?;

        Ok(ReportOutcome {
            image,
            summary: sort_summary(&records),
        })
    }
}

/// Runner for the reports selected in a [`ReportConfig`]
pub struct ReportRunner {
    config: ReportConfig,
    reports: Vec<Box<dyn Report>>,
}

impl ReportRunner {
    /// Create a runner, validating the configuration
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate()?;

        let mut reports: Vec<Box<dyn Report>> = Vec::new();
        if config.selection.includes_benchmark() {
            reports.push(Box::new(BenchmarkReport::new(&config.benchmark_csv)));
        }
        if config.selection.includes_sort() {
            reports.push(Box::new(SortReport::new(&config.sort_csv)));
        }

        Ok(Self { config, reports })
    }

    /// Names of the reports that will run, in order
    pub fn report_names(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.name()).collect()
    }

    /// Run every report in order, calling `on_done` after each one.
    ///
    /// Stops at the first failure.
    pub fn run<F>(&self, mut on_done: F) -> Result<Vec<ReportOutcome>>
    where
        F: FnMut(&ReportOutcome),
    {
        std::fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| Error::io(&self.config.output_dir, e))?;

        let mut outcomes = Vec::with_capacity(self.reports.len());
        for report in &self.reports {
            tracing::info!("Running {} report", report.name());
            let outcome = report.run(&self.config.output_dir, self.config.dpi)?;
            tracing::info!("Wrote {}", outcome.image.display());
            on_done(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
