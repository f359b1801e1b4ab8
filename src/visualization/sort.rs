//! Standard sort vs radix sort timing chart

use super::{draw_panel_scaled, FigureStyle, LegendPosition, Line, Marker, PanelSpec, PixelRange, Scale};
use crate::config::figure_pixels;
use crate::error::Result;
use crate::metrics::clamp_to_timer_floor;
use crate::records::SortRecord;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const FIGURE_INCHES: (f64, f64) = (10.0, 6.0);
const TITLE: &str = "Sorting Algorithm Comparison (Task S4: Sort by Surname, Name)";

/// Caveat printed inside the plot area
pub const TIMER_NOTE: &str = "Note: Values < 0.0001s capped at 0.00005s (timer precision limit)";

const STANDARD_COLOR: RGBColor = RGBColor(0x9b, 0x59, 0xb6);
const RADIX_COLOR: RGBColor = RGBColor(0xf3, 0x9c, 0x12);
const WHEAT: RGBColor = RGBColor(245, 222, 179);

const SPEC: PanelSpec = PanelSpec {
    title: "Sorting Time Comparison",
    x_desc: "Dataset Size (records)",
    y_desc: "Time (seconds)",
    y_scale: Scale::Log,
    legend: LegendPosition::LowerRight,
};

pub struct SortPlotter;

impl SortPlotter {
    /// Plotted lines, with zero timings raised to the timer floor
    pub fn lines(records: &[SortRecord]) -> Vec<Line> {
        let clamped = records
            .iter()
            .filter(|r| r.standard_sort == 0.0 || r.radix_sort == 0.0)
            .count();
        if clamped > 0 {
            tracing::warn!(
                "{} sort rows below timer resolution, plotting them at the floor",
                clamped
            );
        }

        let points = |time: fn(&SortRecord) -> f64| -> Vec<(f64, f64)> {
            records
                .iter()
                .map(|r| (r.dataset_size as f64, clamp_to_timer_floor(time(r))))
                .collect()
        };

        vec![
            Line {
                label: "Standard Sort (std::sort)".to_string(),
                color: STANDARD_COLOR,
                marker: Marker::Circle,
                points: points(|r| r.standard_sort),
            },
            Line {
                label: "Radix Sort (MSD)".to_string(),
                color: RADIX_COLOR,
                marker: Marker::Square,
                points: points(|r| r.radix_sort),
            },
        ]
    }

    /// Render the log-log timing comparison
    pub fn plot(records: &[SortRecord], path: &Path, dpi: u32) -> Result<()> {
        let style = FigureStyle::new(dpi);
        let root = BitMapBackend::new(path, figure_pixels(FIGURE_INCHES.0, FIGURE_INCHES.1, dpi))
            .into_drawing_area();
        root.fill(&WHITE)?;

        if records.is_empty() {
            root.present()?;
            return Ok(());
        }

        let body = root.titled(TITLE, style.bold(14.0))?;
        let plot_area = draw_panel_scaled(&body, &SPEC, &Self::lines(records), style)?;
        Self::draw_note(&root, plot_area, style)?;

        root.present()?;
        Ok(())
    }

    /// Boxed caveat in the top-left corner of the plotting area.
    ///
    /// `root` must be the full canvas so backend pixel coordinates line up.
    fn draw_note<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        (x_px, y_px): PixelRange,
        style: FigureStyle,
    ) -> Result<()> {
        let font: TextStyle = style.font(8.0).into();
        let (text_w, text_h) = root.estimate_text_size(TIMER_NOTE, &font)?;
        let pad = style.px(3.0) as i32;

        let width = x_px.end - x_px.start;
        let height = y_px.end - y_px.start;
        let left = x_px.start + width / 50;
        let top = y_px.start + height / 50;

        root.draw(&Rectangle::new(
            [
                (left, top),
                (left + text_w as i32 + 2 * pad, top + text_h as i32 + 2 * pad),
            ],
            WHEAT.mix(0.3).filled(),
        ))?;
        root.draw(&Text::new(TIMER_NOTE, (left + pad, top + pad), font))?;

        Ok(())
    }
}
