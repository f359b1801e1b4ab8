//! Benchmark result records and CSV loading
//!
//! Two inputs are understood:
//! - **Database benchmarks**: one row per (variant, dataset size) with the
//!   operations completed in the timed window, memory use and load time
//! - **Sort benchmarks**: one row per dataset size with the standard sort and
//!   radix sort wall-clock times

use crate::error::{Error, Result};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header columns required in the database benchmark CSV
pub const BENCHMARK_COLUMNS: [&str; 5] = [
    "Variant",
    "DatasetSize",
    "OperationsCount",
    "MemoryKB",
    "LoadTime",
];

/// Header columns required in the sort benchmark CSV
pub const SORT_COLUMNS: [&str; 3] = ["DatasetSize", "StandardSort", "RadixSort"];

/// Measurements for one database variant at one dataset size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Variant identifier
    #[serde(rename = "Variant")]
    pub variant: String,
    /// Number of records loaded
    #[serde(rename = "DatasetSize")]
    pub dataset_size: u64,
    /// Operations completed in the timed window
    #[serde(rename = "OperationsCount")]
    pub operations_count: u64,
    /// Memory used by the loaded database in KB
    #[serde(rename = "MemoryKB")]
    pub memory_kb: f64,
    /// Load time in seconds
    #[serde(rename = "LoadTime")]
    pub load_time: f64,
}

/// Sort timings at one dataset size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRecord {
    /// Number of records sorted
    #[serde(rename = "DatasetSize")]
    pub dataset_size: u64,
    /// Standard comparison sort time in seconds
    #[serde(rename = "StandardSort")]
    pub standard_sort: f64,
    /// Radix sort time in seconds
    #[serde(rename = "RadixSort")]
    pub radix_sort: f64,
}

/// Load database benchmark records from a CSV file
pub fn load_benchmark_records(path: &Path) -> Result<Vec<BenchmarkRecord>> {
    load(path, &BENCHMARK_COLUMNS)
}

/// Load sort benchmark records from a CSV file
pub fn load_sort_records(path: &Path) -> Result<Vec<SortRecord>> {
    load(path, &SORT_COLUMNS)
}

fn load<T: DeserializeOwned>(path: &Path, columns: &[&'static str]) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let records = read_records(file, path, columns)?;
    tracing::debug!("Loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parse records from any reader, checking the header for `columns` first.
///
/// `path` is only used to label errors.
pub fn read_records<T, R>(reader: R, path: &Path, columns: &[&'static str]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers().map_err(|e| Error::csv(path, e))?.clone();
    for &column in columns {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    rdr.deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| Error::csv(path, e))
}
