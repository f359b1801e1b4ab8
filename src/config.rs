//! Report configuration types

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default location of the database benchmark results
pub const DEFAULT_BENCHMARK_CSV: &str = "build/benchmark_results.csv";

/// Default location of the sort benchmark results
pub const DEFAULT_SORT_CSV: &str = "build/sort_results.csv";

/// File name of the four-panel database comparison figure
pub const BENCHMARK_IMAGE: &str = "benchmark_comparison.png";

/// File name of the sort comparison figure
pub const SORT_IMAGE: &str = "sort_comparison.png";

/// Default rendering resolution
pub const DEFAULT_DPI: u32 = 300;

/// Highest accepted rendering resolution
pub const MAX_DPI: u32 = 1200;

/// Which reports a run should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportSelection {
    /// Database benchmark report followed by the sort report
    #[default]
    All,
    /// Database benchmark report only
    Benchmark,
    /// Sort report only
    Sort,
}

impl ReportSelection {
    /// Whether the database benchmark report is part of the run
    pub fn includes_benchmark(self) -> bool {
        matches!(self, ReportSelection::All | ReportSelection::Benchmark)
    }

    /// Whether the sort report is part of the run
    pub fn includes_sort(self) -> bool {
        matches!(self, ReportSelection::All | ReportSelection::Sort)
    }
}

/// Report run configuration
///
/// Holds the input CSV paths, the directory the figures are written to and
/// the rendering resolution.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Database benchmark CSV
    pub benchmark_csv: PathBuf,

    /// Sort benchmark CSV
    pub sort_csv: PathBuf,

    /// Directory receiving the rendered images
    pub output_dir: PathBuf,

    /// Pixels per inch used when sizing figures
    pub dpi: u32,

    /// Reports to produce
    pub selection: ReportSelection,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            benchmark_csv: PathBuf::from(DEFAULT_BENCHMARK_CSV),
            sort_csv: PathBuf::from(DEFAULT_SORT_CSV),
            output_dir: PathBuf::from("."),
            dpi: DEFAULT_DPI,
            selection: ReportSelection::All,
        }
    }
}

impl ReportConfig {
    /// Set the database benchmark CSV
    pub fn with_benchmark_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.benchmark_csv = path.into();
        self
    }

    /// Set the sort benchmark CSV
    pub fn with_sort_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.sort_csv = path.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the rendering resolution
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Restrict the run to a subset of reports
    pub fn with_selection(mut self, selection: ReportSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Path of the database comparison image
    pub fn benchmark_image(&self) -> PathBuf {
        self.output_dir.join(BENCHMARK_IMAGE)
    }

    /// Path of the sort comparison image
    pub fn sort_image(&self) -> PathBuf {
        self.output_dir.join(SORT_IMAGE)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(Error::Config("dpi must be at least 1".into()));
        }

        if self.dpi > MAX_DPI {
            return Err(Error::Config(format!(
                "dpi must be at most {}, got {}",
                MAX_DPI, self.dpi
            )));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::Config("output directory must not be empty".into()));
        }

        Ok(())
    }
}

/// Pixel dimensions of a figure of `width_in` x `height_in` inches
pub fn figure_pixels(width_in: f64, height_in: f64, dpi: u32) -> (u32, u32) {
    let dpi = f64::from(dpi);
    ((width_in * dpi).round() as u32, (height_in * dpi).round() as u32)
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ReportConfig::default();
        assert_eq!(config.benchmark_csv, PathBuf::from("build/benchmark_results.csv"));
        assert_eq!(config.sort_csv, PathBuf::from("build/sort_results.csv"));
        assert_eq!(config.benchmark_image(), PathBuf::from("./benchmark_comparison.png"));
        assert_eq!(config.sort_image(), PathBuf::from("./sort_comparison.png"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dpi_rejected() {
        let config = ReportConfig::default().with_dpi(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_dpi_upper_bound() {
        assert!(ReportConfig::default().with_dpi(MAX_DPI).validate().is_ok());

        match ReportConfig::default().with_dpi(1_000_000).validate() {
            Err(Error::Config(msg)) => assert!(msg.contains("1000000")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_selection() {
        assert!(ReportSelection::All.includes_benchmark());
        assert!(ReportSelection::All.includes_sort());
        assert!(!ReportSelection::Benchmark.includes_sort());
        assert!(!ReportSelection::Sort.includes_benchmark());
    }

    #[test]
    fn test_figure_pixels() {
        assert_eq!(figure_pixels(14.0, 10.0, 300), (4200, 3000));
        assert_eq!(figure_pixels(10.0, 6.0, 100), (1000, 600));
    }
}
