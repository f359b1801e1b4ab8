//! Derived metrics and grouping of benchmark records

use crate::error::Result;
use crate::records::{BenchmarkRecord, SortRecord};
use crate::variants::VariantMeta;
use std::fmt;

/// Smallest duration the benchmark timer can represent, in seconds.
///
/// Recorded zeros are drawn at this value so they survive a log axis.
pub const TIMER_FLOOR_SECS: f64 = 0.00005;

/// A plotted quantity of the database benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Operations completed in the timed window
    Operations,
    /// Memory use in KB
    MemoryKb,
    /// Load time in seconds
    LoadTime,
    /// Operations per KB of memory
    Efficiency,
}

impl Metric {
    /// Value of this metric for a record, `None` when it is undefined
    pub fn value(self, record: &BenchmarkRecord) -> Option<f64> {
        match self {
            Metric::Operations => Some(record.operations_count as f64),
            Metric::MemoryKb => Some(record.memory_kb),
            Metric::LoadTime => Some(record.load_time),
            Metric::Efficiency => efficiency(record),
        }
    }
}

/// Operations completed per KB of memory.
///
/// Returns `None` for rows that report zero memory.
pub fn efficiency(record: &BenchmarkRecord) -> Option<f64> {
    if record.memory_kb == 0.0 {
        return None;
    }
    Some(record.operations_count as f64 / record.memory_kb)
}

/// Replace a recorded zero duration with [`TIMER_FLOOR_SECS`]
pub fn clamp_to_timer_floor(seconds: f64) -> f64 {
    if seconds == 0.0 {
        TIMER_FLOOR_SECS
    } else {
        seconds
    }
}

/// One series of `(dataset_size, value)` points
#[derive(Debug, Clone)]
pub struct Series {
    /// Variant the points belong to
    pub variant: &'static VariantMeta,
    /// Points sorted by dataset size
    pub points: Vec<(f64, f64)>,
}

/// Database benchmark records grouped for plotting and reporting
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    records: Vec<BenchmarkRecord>,
    variants: Vec<&'static VariantMeta>,
    sizes: Vec<u64>,
}

impl BenchmarkTable {
    /// Group records, failing on any variant without display metadata
    pub fn new(records: Vec<BenchmarkRecord>) -> Result<Self> {
        let mut variants: Vec<&'static VariantMeta> = Vec::new();
        for record in &records {
            let meta = VariantMeta::lookup(&record.variant)?;
            if !variants.iter().any(|v| v.id == meta.id) {
                variants.push(meta);
            }
        }

        let mut sizes: Vec<u64> = records.iter().map(|r| r.dataset_size).collect();
        sizes.sort_unstable();
        sizes.dedup();

        Ok(Self {
            records,
            variants,
            sizes,
        })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct variants in order of first appearance
    pub fn variants(&self) -> &[&'static VariantMeta] {
        &self.variants
    }

    /// Distinct dataset sizes, ascending
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Records for one dataset size, in input order
    pub fn rows_for_size(&self, size: u64) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records.iter().filter(move |r| r.dataset_size == size)
    }

    /// Points of `metric` for one variant, sorted by dataset size.
    ///
    /// Rows where the metric is undefined are left out.
    pub fn series(&self, variant: &'static VariantMeta, metric: Metric) -> Series {
        let mut rows: Vec<&BenchmarkRecord> = self
            .records
            .iter()
            .filter(|r| r.variant == variant.id)
            .collect();
        rows.sort_by_key(|r| r.dataset_size);

        let points = rows
            .into_iter()
            .filter_map(|r| match metric.value(r) {
                Some(value) => Some((r.dataset_size as f64, value)),
                None => {
                    tracing::warn!(
                        "Skipping {} at {} records: {:?} undefined (zero memory)",
                        variant.id,
                        r.dataset_size,
                        metric
                    );
                    None
                }
            })
            .collect();

        Series { variant, points }
    }

    /// One series per variant for `metric`
    pub fn all_series(&self, metric: Metric) -> Vec<Series> {
        self.variants
            .iter()
            .map(|&variant| self.series(variant, metric))
            .collect()
    }
}

/// Standard-to-radix time ratio of one sort measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// Finite ratio `standard / radix`
    Ratio(f64),
    /// Radix time is zero while standard time is not
    Unbounded,
    /// Both times are zero, nothing can be said
    Undetermined,
}

impl Speedup {
    /// Compute from raw (unclamped) timings
    pub fn compute(standard: f64, radix: f64) -> Self {
        if radix > 0.0 {
            Speedup::Ratio(standard / radix)
        } else if standard > 0.0 {
            Speedup::Unbounded
        } else {
            Speedup::Undetermined
        }
    }

    /// Speedup of a sort record
    pub fn of(record: &SortRecord) -> Self {
        Self::compute(record.standard_sort, record.radix_sort)
    }

    /// Whether radix sort came out ahead
    pub fn radix_faster(self) -> Option<bool> {
        match self {
            Speedup::Ratio(ratio) => Some(ratio > 1.0),
            Speedup::Unbounded => Some(true),
            Speedup::Undetermined => None,
        }
    }

    /// Which algorithm was faster, as printed in the summary
    pub fn verdict(self) -> &'static str {
        match self.radix_faster() {
            Some(true) => "(Radix faster)",
            Some(false) => "(Standard faster)",
            None => "(both below timer resolution)",
        }
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Ratio(ratio) => write!(f, "{:.2}x {}", ratio, self.verdict()),
            Speedup::Unbounded => write!(f, "inf {}", self.verdict()),
            Speedup::Undetermined => write!(f, "N/A {}", self.verdict()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn record(variant: &str, size: u64, ops: u64, memory_kb: f64, load_time: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            variant: variant.to_string(),
            dataset_size: size,
            operations_count: ops,
            memory_kb,
            load_time,
        }
    }

    fn sample_table() -> BenchmarkTable {
        BenchmarkTable::new(vec![
            record("Variant2_Mixed", 10000, 4100, 900.0, 0.09),
            record("Variant1_HashMap", 1000, 5000, 120.5, 0.0123),
            record("Variant2_Mixed", 1000, 4800, 95.2, 0.0098),
            record("Variant3_Map_BST", 1000, 4600, 110.0, 0.0150),
            record("Variant1_HashMap", 100, 5200, 14.0, 0.001),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_grouping() {
        let table = sample_table();
        assert_eq!(table.len(), 5);
        assert_eq!(table.sizes(), &[100, 1000, 10000]);

        let ids: Vec<&str> = table.variants().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["Variant2_Mixed", "Variant1_HashMap", "Variant3_Map_BST"]);

        let at_1000: Vec<&str> = table
            .rows_for_size(1000)
            .map(|r| r.variant.as_str())
            .collect();
        assert_eq!(at_1000, vec!["Variant1_HashMap", "Variant2_Mixed", "Variant3_Map_BST"]);
    }

    #[test]
    fn test_one_series_per_variant() {
        let table = sample_table();
        for metric in [Metric::Operations, Metric::MemoryKb, Metric::LoadTime, Metric::Efficiency] {
            assert_eq!(table.all_series(metric).len(), table.variants().len());
        }
    }

    #[test]
    fn test_series_sorted_by_size() {
        let table = sample_table();
        let meta = VariantMeta::lookup("Variant1_HashMap").unwrap();
        let series = table.series(meta, Metric::Operations);
        assert_eq!(series.points, vec![(100.0, 5200.0), (1000.0, 5000.0)]);
    }

    #[test]
    fn test_efficiency_values() {
        let r = record("Variant1_HashMap", 1000, 5000, 120.5, 0.0123);
        let eff = efficiency(&r).unwrap();
        assert!((eff - 41.49).abs() < 0.01);

        let table = sample_table();
        for series in table.all_series(Metric::Efficiency) {
            for (size, value) in series.points {
                let row = table
                    .rows_for_size(size as u64)
                    .find(|r| r.variant == series.variant.id)
                    .unwrap();
                assert_eq!(value, row.operations_count as f64 / row.memory_kb);
            }
        }
    }

    #[test]
    fn test_zero_memory_skipped_from_efficiency() {
        let table = BenchmarkTable::new(vec![
            record("Variant1_HashMap", 100, 5200, 0.0, 0.001),
            record("Variant1_HashMap", 1000, 5000, 100.0, 0.01),
        ])
        .unwrap();
        let meta = VariantMeta::lookup("Variant1_HashMap").unwrap();

        let eff = table.series(meta, Metric::Efficiency);
        assert_eq!(eff.points, vec![(1000.0, 50.0)]);

        // Other panels still show the row
        assert_eq!(table.series(meta, Metric::MemoryKb).points.len(), 2);
    }

    #[test]
    fn test_unknown_variant_fails() {
        let err = BenchmarkTable::new(vec![record("Variant9", 100, 1, 1.0, 0.1)]).unwrap_err();
        assert!(matches!(err, Error::UnknownVariant(id) if id == "Variant9"));
    }

    #[test]
    fn test_clamp_to_timer_floor() {
        assert_eq!(clamp_to_timer_floor(0.0), 0.00005);
        assert_eq!(clamp_to_timer_floor(0.0021), 0.0021);
        assert_eq!(clamp_to_timer_floor(0.00001), 0.00001);
    }

    #[test]
    fn test_speedup_verdicts() {
        assert_eq!(Speedup::compute(0.02, 0.01), Speedup::Ratio(2.0));
        assert_eq!(Speedup::compute(0.02, 0.01).verdict(), "(Radix faster)");
        assert_eq!(Speedup::compute(0.01, 0.01).verdict(), "(Standard faster)");
        assert_eq!(Speedup::compute(0.0, 0.0021).verdict(), "(Standard faster)");
        assert_eq!(Speedup::compute(0.003, 0.0), Speedup::Unbounded);
        assert_eq!(Speedup::compute(0.0, 0.0), Speedup::Undetermined);
    }

    #[test]
    fn test_speedup_display() {
        assert_eq!(Speedup::compute(0.0, 0.0021).to_string(), "0.00x (Standard faster)");
        assert_eq!(Speedup::compute(0.05, 0.01).to_string(), "5.00x (Radix faster)");
        assert_eq!(Speedup::Unbounded.to_string(), "inf (Radix faster)");
        assert_eq!(
            Speedup::Undetermined.to_string(),
            "N/A (both below timer resolution)"
        );
    }
}
