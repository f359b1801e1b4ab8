//! Four-panel comparison of the database variants

use super::{draw_panel_scaled, FigureStyle, LegendPosition, Line, Marker, PanelSpec, Scale};
use crate::config::figure_pixels;
use crate::error::Result;
use crate::metrics::{BenchmarkTable, Metric};
use plotters::prelude::*;
use std::path::Path;

const FIGURE_INCHES: (f64, f64) = (14.0, 10.0);
const TITLE: &str = "Database Implementation Comparison";
const SUBTITLE: &str = "(Operations ratio A:B:C = 5:5:50)";
const X_DESC: &str = "Dataset Size (records)";

const PANELS: [(Metric, Marker, PanelSpec); 4] = [
    (
        Metric::Operations,
        Marker::Circle,
        PanelSpec {
            title: "Performance: Operations per 10 seconds",
            x_desc: X_DESC,
            y_desc: "Operations Completed in 10s",
            y_scale: Scale::Linear,
            legend: LegendPosition::Auto,
        },
    ),
    (
        Metric::MemoryKb,
        Marker::Square,
        PanelSpec {
            title: "Memory Consumption",
            x_desc: X_DESC,
            y_desc: "Memory Usage (KB)",
            y_scale: Scale::Log,
            legend: LegendPosition::Auto,
        },
    ),
    (
        Metric::LoadTime,
        Marker::Triangle,
        PanelSpec {
            title: "Database Load Time",
            x_desc: X_DESC,
            y_desc: "Load Time (seconds)",
            y_scale: Scale::Linear,
            legend: LegendPosition::Auto,
        },
    ),
    (
        Metric::Efficiency,
        Marker::Diamond,
        PanelSpec {
            title: "Memory Efficiency (Ops/KB)",
            x_desc: X_DESC,
            y_desc: "Operations per KB",
            y_scale: Scale::Linear,
            legend: LegendPosition::Auto,
        },
    ),
];

pub struct BenchmarkPlotter;

impl BenchmarkPlotter {
    /// Panel specs in drawing order (row-major), each with one line per variant
    pub fn panels(table: &BenchmarkTable) -> Vec<(PanelSpec, Vec<Line>)> {
        PANELS
            .iter()
            .map(|(metric, marker, spec)| {
                let lines = table
                    .all_series(*metric)
                    .into_iter()
                    .map(|series| Line {
                        label: series.variant.label.to_string(),
                        color: series.variant.color,
                        marker: *marker,
                        points: series.points,
                    })
                    .collect();
                (spec.clone(), lines)
            })
            .collect()
    }

    /// Render the throughput, memory, load time and efficiency panels
    pub fn plot(table: &BenchmarkTable, path: &Path, dpi: u32) -> Result<()> {
        let style = FigureStyle::new(dpi);
        let root = BitMapBackend::new(path, figure_pixels(FIGURE_INCHES.0, FIGURE_INCHES.1, dpi))
            .into_drawing_area();
        root.fill(&WHITE)?;

        if table.is_empty() {
            root.present()?;
            return Ok(());
        }

        let body = root
            .titled(TITLE, style.bold(14.0))?
            .titled(SUBTITLE, style.bold(14.0))?;
        let areas = body.split_evenly((2, 2));

        for (area, (spec, lines)) in areas.iter().zip(Self::panels(table)) {
            draw_panel_scaled(area, &spec, &lines, style)?;
        }

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::BenchmarkRecord;

    fn record(variant: &str, size: u64, ops: u64, memory_kb: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            variant: variant.to_string(),
            dataset_size: size,
            operations_count: ops,
            memory_kb,
            load_time: 0.01,
        }
    }

    #[test]
    fn test_one_line_per_variant_per_panel() {
        let table = BenchmarkTable::new(vec![
            record("Variant1_HashMap", 1000, 5000, 120.5),
            record("Variant2_Mixed", 1000, 4800, 95.2),
            record("Variant3_Map_BST", 1000, 4600, 110.0),
            record("Variant1_HashMap", 10000, 4000, 1200.0),
            record("Variant2_Mixed", 10000, 3900, 950.0),
            record("Variant3_Map_BST", 10000, 3100, 1100.0),
        ])
        .unwrap();

        let panels = BenchmarkPlotter::panels(&table);
        assert_eq!(panels.len(), 4);
        for (_, lines) in &panels {
            assert_eq!(lines.len(), 3);
            for line in lines {
                assert_eq!(line.points.len(), 2);
            }
        }

        let (spec, efficiency) = &panels[3];
        assert_eq!(spec.title, "Memory Efficiency (Ops/KB)");
        assert_eq!(efficiency[0].label, "Variant 1: HashMap (unordered_map)");
        assert!((efficiency[0].points[0].1 - 41.49).abs() < 0.01);
    }

    #[test]
    fn test_panel_scales() {
        let scales: Vec<Scale> = PANELS.iter().map(|(_, _, spec)| spec.y_scale).collect();
        assert_eq!(
            scales,
            vec![Scale::Linear, Scale::Log, Scale::Linear, Scale::Linear]
        );
    }
}
