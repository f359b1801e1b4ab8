//! Console summaries of benchmark results

use crate::error::Result;
use crate::metrics::{BenchmarkTable, Speedup};
use crate::records::SortRecord;
use crate::variants::VariantMeta;

/// Per-size breakdown of the database benchmark
pub fn benchmark_summary(table: &BenchmarkTable) -> Result<String> {
    let mut out = String::new();
    out.push_str("\n=== Performance Summary ===\n");

    for &size in table.sizes() {
        out.push_str(&format!("\nDataset Size: {} records\n", size));
        for row in table.rows_for_size(size) {
            let meta = VariantMeta::lookup(&row.variant)?;
            out.push_str(&format!("  {}:\n", meta.label));
            out.push_str(&format!("    Operations/10s: {}\n", row.operations_count));
            out.push_str(&format!("    Memory: {} KB\n", format_float(row.memory_kb)));
            out.push_str(&format!("    Load time: {:.4} s\n", row.load_time));
        }
    }

    Ok(out)
}

/// Per-row timings and speedup of the sort benchmark.
///
/// Uses the recorded timings, zeros included.
pub fn sort_summary(records: &[SortRecord]) -> String {
    let mut out = String::new();
    out.push_str("\n=== Sort Performance Summary ===\n");

    for record in records {
        out.push_str(&format!("\nDataset: {} records\n", record.dataset_size));
        out.push_str(&format!("  Standard Sort: {:.4} s\n", record.standard_sort));
        out.push_str(&format!("  Radix Sort: {:.4} s\n", record.radix_sort));
        out.push_str(&format!("  Speedup: {}\n", Speedup::of(record)));
    }

    out
}

/// Print a float the way a spreadsheet column shows it: `110.0`, `95.2`
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
