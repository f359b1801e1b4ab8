//! CLI argument parsing and command handling

use crate::config::{
    display_name, ReportConfig, ReportSelection, DEFAULT_BENCHMARK_CSV, DEFAULT_SORT_CSV,
};
use crate::runner::ReportRunner;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Bench Viz - charts for student database and sort benchmarks
#[derive(Parser, Debug)]
#[command(name = "bench-viz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database benchmark results
    #[arg(long, default_value = DEFAULT_BENCHMARK_CSV)]
    pub benchmark_csv: PathBuf,

    /// Sort benchmark results
    #[arg(long, default_value = DEFAULT_SORT_CSV)]
    pub sort_csv: PathBuf,

    /// Directory the PNG figures are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Produce only one of the reports
    #[arg(long, value_enum)]
    pub only: Option<Only>,

    /// Resolution of the rendered figures
    #[arg(long, default_value = "300")]
    pub dpi: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Single report to run
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Only {
    /// Database variant comparison
    Benchmark,
    /// Standard vs radix sort comparison
    Sort,
}

impl Cli {
    /// Build the report configuration from the arguments
    pub fn config(&self) -> ReportConfig {
        let selection = match self.only {
            None => ReportSelection::All,
            Some(Only::Benchmark) => ReportSelection::Benchmark,
            Some(Only::Sort) => ReportSelection::Sort,
        };

        ReportConfig::default()
            .with_benchmark_csv(&self.benchmark_csv)
            .with_sort_csv(&self.sort_csv)
            .with_output_dir(&self.output_dir)
            .with_dpi(self.dpi)
            .with_selection(selection)
    }

    /// Run the selected reports and print their summaries
    pub fn run(&self) -> Result<()> {
        let config = self.config();
        tracing::info!("Benchmark input: {}", config.benchmark_csv.display());
        tracing::info!("Sort input: {}", config.sort_csv.display());
        tracing::info!("Output directory: {}", config.output_dir.display());

        let runner = ReportRunner::new(config).context("Invalid report configuration")?;

        println!("Generating benchmark visualizations...");

        let outcomes = runner
            .run(|outcome| {
                println!("Saved: {}", display_name(&outcome.image));
                print!("{}", outcome.summary);
            })
            .context("Failed to generate reports")?;

        let images: Vec<String> = outcomes.iter().map(|o| display_name(&o.image)).collect();
        println!("\nDone! Check {}", images.join(" and "));

        Ok(())
    }
}
