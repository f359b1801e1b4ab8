//! Visualization and plotting
//!
//! Figures are sized in inches and rendered at a configurable DPI, so font
//! sizes, line widths and marker sizes are given in points and scaled here.

pub mod benchmark;
pub mod sort;

pub use benchmark::BenchmarkPlotter;
pub use sort::SortPlotter;

use crate::error::Result;
use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

/// Axis scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Linear axis
    Linear,
    /// Base-10 logarithmic axis
    Log,
}

/// Point marker drawn on top of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle
    Circle,
    /// Filled square
    Square,
    /// Filled triangle
    Triangle,
    /// Filled diamond
    Diamond,
}

/// A labelled line on a chart
#[derive(Debug, Clone)]
pub struct Line {
    /// Legend label
    pub label: String,
    /// Line and marker color
    pub color: RGBColor,
    /// Marker drawn at each point
    pub marker: Marker,
    /// Data points
    pub points: Vec<(f64, f64)>,
}

/// Corner holding the legend box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerRight,
    /// Upper corner on the opposite side of the highest point
    Auto,
}

impl LegendPosition {
    /// Settle `Auto` against the plotted lines.
    ///
    /// The highest point decides the side: left of the log-x midpoint puts the
    /// legend upper right, otherwise upper left.
    pub fn resolve(self, lines: &[Line], x_range: &Range<f64>, y_scale: Scale) -> LegendPosition {
        if self != LegendPosition::Auto {
            return self;
        }

        let peak = lines
            .iter()
            .flat_map(|l| plottable(&l.points, y_scale))
            .fold(None, |acc: Option<(f64, f64)>, p| match acc {
                Some(best) if best.1 >= p.1 => Some(best),
                _ => Some(p),
            });

        let midpoint = (x_range.start * x_range.end).sqrt();
        match peak {
            Some((x, _)) if x < midpoint => LegendPosition::UpperRight,
            _ => LegendPosition::UpperLeft,
        }
    }

    fn to_series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendPosition::UpperLeft | LegendPosition::Auto => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

/// Titles, axis labels and scaling of one chart
#[derive(Debug, Clone)]
pub struct PanelSpec {
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub y_scale: Scale,
    pub legend: LegendPosition,
}

/// DPI-aware sizing of fonts and strokes
#[derive(Debug, Clone, Copy)]
pub struct FigureStyle {
    dpi: u32,
}

impl FigureStyle {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Convert typographic points to pixels
    pub fn px(&self, points: f64) -> u32 {
        (points * f64::from(self.dpi) / 72.0).round().max(1.0) as u32
    }

    pub fn font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(
            FontFamily::SansSerif,
            f64::from(self.px(points)),
            FontStyle::Normal,
        )
    }

    pub fn bold(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(
            FontFamily::SansSerif,
            f64::from(self.px(points)),
            FontStyle::Bold,
        )
    }
}

/// Axis range covering `values`.
///
/// Log axes ignore non-positive values and pad by a factor, linear axes pad
/// by 5% of the span. Returns `None` when nothing can be plotted.
pub fn axis_range(values: impl IntoIterator<Item = f64>, scale: Scale) -> Option<Range<f64>> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite() && (scale == Scale::Linear || *v > 0.0))
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })?;

    let range = match scale {
        Scale::Log => (min / 1.5)..(max * 1.5),
        Scale::Linear => {
            let span = max - min;
            let pad = if span > 0.0 {
                span * 0.05
            } else if max != 0.0 {
                max.abs() * 0.1
            } else {
                1.0
            };
            (min - pad)..(max + pad)
        }
    };
    Some(range)
}

/// Drop points that cannot be placed on a log-x axis with the given y scale
pub fn plottable(points: &[(f64, f64)], y_scale: Scale) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|&(x, y)| x > 0.0 && y.is_finite() && (y_scale == Scale::Linear || y > 0.0))
        .collect()
}

const MAX_TICK_DECIMALS: usize = 12;

/// Decimal places needed to tell apart values `step` apart
fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    ((-step.log10()).ceil().max(0.0) as usize).min(MAX_TICK_DECIMALS)
}

/// Tick label formatter for an axis spanning `range`.
///
/// Linear axes take their precision from the tick step (about a tenth of the
/// span), log axes from each tick's own magnitude. Trailing zeros are dropped.
pub fn tick_formatter(range: &Range<f64>, scale: Scale) -> impl Fn(f64) -> String {
    let linear_decimals = decimals_for_step((range.end - range.start).abs() / 10.0);

    move |value| {
        if value == 0.0 {
            return "0".to_string();
        }
        let decimals = match scale {
            Scale::Linear => linear_decimals,
            Scale::Log => (decimals_for_step(value.abs()) + 1).min(MAX_TICK_DECIMALS),
        };
        let label = format!("{:.*}", decimals, value);
        if label.contains('.') {
            label.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            label
        }
    }
}

/// Pixel bounds of a chart's plotting area, in backend coordinates
pub type PixelRange = (Range<i32>, Range<i32>);

/// Draw one chart with a log-scaled x axis and one line per entry of `lines`.
///
/// Returns where the data area landed so callers can annotate it.
pub fn draw_panel<DB, Y>(
    area: &DrawingArea<DB, Shift>,
    spec: &PanelSpec,
    lines: &[Line],
    x_range: Range<f64>,
    y_range: Y,
    y_bounds: &Range<f64>,
    style: FigureStyle,
) -> Result<PixelRange>
where
    DB: DrawingBackend,
    Y: AsRangedCoord<Value = f64>,
    Y::CoordDescType: ValueFormatter<f64>,
{
    let x_label = tick_formatter(&x_range, Scale::Log);
    let y_label = tick_formatter(y_bounds, spec.y_scale);
    let legend = spec.legend.resolve(lines, &x_range, spec.y_scale);

    let mut chart = ChartBuilder::on(area)
        .caption(spec.title, style.font(12.0))
        .margin(style.px(6.0))
        .x_label_area_size(style.px(30.0))
        .y_label_area_size(style.px(48.0))
        .build_cartesian_2d(x_range.log_scale(), y_range)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .x_label_formatter(&|x| x_label(*x))
        .y_label_formatter(&|y| y_label(*y))
        .label_style(style.font(9.0))
        .axis_desc_style(style.bold(10.0))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    let stroke = style.px(2.0);
    let radius = style.px(4.0);

    for line in lines {
        let points = plottable(&line.points, spec.y_scale);
        if points.is_empty() {
            continue;
        }
        let color = line.color;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(stroke)))?
            .label(line.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(stroke))
            });

        draw_markers(&mut chart, &points, line.marker, color, radius)?;
    }

    chart
        .configure_series_labels()
        .position(legend.to_series_label_position())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(style.font(9.0))
        .draw()?;

    Ok(chart.plotting_area().get_pixel_range())
}

/// Draw the same y axis either linearly or logarithmically
pub fn draw_panel_scaled<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spec: &PanelSpec,
    lines: &[Line],
    style: FigureStyle,
) -> Result<PixelRange> {
    let all_points = || lines.iter().flat_map(|l| plottable(&l.points, spec.y_scale));

    let x_range = axis_range(all_points().map(|(x, _)| x), Scale::Log).unwrap_or(1.0..10.0);
    let y_range = axis_range(all_points().map(|(_, y)| y), spec.y_scale);

    tracing::debug!(
        "Panel '{}': {} lines, x {:?}, y {:?}",
        spec.title,
        lines.len(),
        x_range,
        y_range
    );

    match spec.y_scale {
        Scale::Linear => {
            let y_range = y_range.unwrap_or(0.0..1.0);
            draw_panel(area, spec, lines, x_range, y_range.clone(), &y_range, style)
        }
        Scale::Log => {
            let y_range = y_range.unwrap_or(1.0..10.0);
            draw_panel(area, spec, lines, x_range, y_range.clone().log_scale(), &y_range, style)
        }
    }
}

fn draw_markers<DB, X, Y>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
    points: &[(f64, f64)],
    marker: Marker,
    color: RGBColor,
    radius: u32,
) -> Result<()>
where
    DB: DrawingBackend,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    let style = color.filled();
    let r = radius as i32;
    let coords = points.iter().copied();

    match marker {
        Marker::Circle => {
            chart.draw_series(
                coords.map(|c| EmptyElement::at(c) + Circle::new((0, 0), radius, style)),
            )?;
        }
        Marker::Square => {
            chart.draw_series(
                coords.map(|c| EmptyElement::at(c) + Rectangle::new([(-r, -r), (r, r)], style)),
            )?;
        }
        Marker::Triangle => {
            chart.draw_series(
                coords.map(|c| EmptyElement::at(c) + TriangleMarker::new((0, 0), radius, style)),
            )?;
        }
        Marker::Diamond => {
            chart.draw_series(coords.map(|c| {
                EmptyElement::at(c) + Polygon::new(vec![(0, -r), (r, 0), (0, r), (-r, 0)], style)
            }))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_axis_range_ignores_non_positive() {
        let range = axis_range(vec![0.0, 100.0, 1000.0, -1.0], Scale::Log).unwrap();
        assert!((range.start - 100.0 / 1.5).abs() < 1e-9);
        assert!((range.end - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_axis_range_padding() {
        let range = axis_range(vec![10.0, 20.0], Scale::Linear).unwrap();
        assert!((range.start - 9.5).abs() < 1e-9);
        assert!((range.end - 20.5).abs() < 1e-9);

        let flat = axis_range(vec![5.0], Scale::Linear).unwrap();
        assert!((flat.start - 4.5).abs() < 1e-9);
        assert!((flat.end - 5.5).abs() < 1e-9);

        let zero = axis_range(vec![0.0], Scale::Linear).unwrap();
        assert_eq!(zero, -1.0..1.0);
    }

    #[test]
    fn test_empty_axis_range() {
        assert!(axis_range(Vec::new(), Scale::Linear).is_none());
        assert!(axis_range(vec![0.0, -3.0], Scale::Log).is_none());
    }

    #[test]
    fn test_plottable_filters_log_values() {
        let points = vec![(100.0, 0.0), (1000.0, 12.0), (0.0, 3.0)];
        assert_eq!(plottable(&points, Scale::Log), vec![(1000.0, 12.0)]);
        assert_eq!(
            plottable(&points, Scale::Linear),
            vec![(100.0, 0.0), (1000.0, 12.0)]
        );
    }

    #[test]
    fn test_style_scaling() {
        let style = FigureStyle::new(72);
        assert_eq!(style.px(10.0), 10);
        let hi = FigureStyle::new(300);
        assert_eq!(hi.px(2.0), 8);
        assert_eq!(hi.px(0.0), 1);
    }

    #[test]
    fn test_load_time_ticks_are_distinct() {
        let range = axis_range(vec![0.0098, 0.0123, 0.0150], Scale::Linear).unwrap();
        let label = tick_formatter(&range, Scale::Linear);

        let labels: Vec<String> = [0.010, 0.011, 0.012, 0.013, 0.014, 0.015]
            .iter()
            .map(|v| label(*v))
            .collect();
        assert_eq!(labels, vec!["0.01", "0.011", "0.012", "0.013", "0.014", "0.015"]);

        let mut unique = labels.clone();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn test_large_linear_ticks_have_no_fraction() {
        let label = tick_formatter(&(3000.0..5500.0), Scale::Linear);
        assert_eq!(label(4000.0), "4000");
        assert_eq!(label(4250.0), "4250");
        assert_eq!(label(0.0), "0");
    }

    #[test]
    fn test_log_ticks_follow_magnitude() {
        let label = tick_formatter(&(0.00003..0.2), Scale::Log);
        assert_eq!(label(0.00005), "0.00005");
        assert_eq!(label(0.0002), "0.0002");
        assert_eq!(label(0.015), "0.015");
        assert_eq!(label(100000.0), "100000");
    }

    fn line(points: Vec<(f64, f64)>) -> Line {
        Line {
            label: "Variant".to_string(),
            color: BLACK,
            marker: Marker::Circle,
            points,
        }
    }

    #[test]
    fn test_auto_legend_avoids_peak() {
        let x_range = 100.0 / 1.5..100000.0 * 1.5;

        let rising = [line(vec![(100.0, 0.001), (1000.0, 0.0123), (100000.0, 1.2)])];
        assert_eq!(
            LegendPosition::Auto.resolve(&rising, &x_range, Scale::Linear),
            LegendPosition::UpperLeft
        );

        let falling = [line(vec![(100.0, 5200.0), (1000.0, 5000.0), (100000.0, 3000.0)])];
        assert_eq!(
            LegendPosition::Auto.resolve(&falling, &x_range, Scale::Linear),
            LegendPosition::UpperRight
        );

        assert_eq!(
            LegendPosition::LowerRight.resolve(&falling, &x_range, Scale::Linear),
            LegendPosition::LowerRight
        );
    }
}
