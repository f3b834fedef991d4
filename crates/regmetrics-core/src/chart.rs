//! Word count chart projection.
//!
//! The chart is a fixed overview of the full snapshot: one line series with
//! a point per agency (x = agency, y = word count), x-axis labels hidden and
//! no legend. It is drawn once after load and never follows the filter.
//!
//! Only the current snapshot is plotted. A per-agency history (several
//! points over time) would add a series per agency here; nothing in the
//! dashboard provides such data yet.
//!
//! [`render_chart`] produces the series, [`ChartLayout::plot`] maps it onto
//! a drawing surface of a given size.

use crate::config::{
    CHART_HEIGHT, CHART_LINE_COLOR, CHART_PADDING, CHART_SERIES_LABEL, CHART_WIDTH, CHART_Y_TICKS,
};
use crate::snapshot::MetricsSnapshot;
use crate::summary::format_count;

/// One labeled point of the series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    /// Agency key as received
    pub agency: String,
    /// Human-friendly name used in point tooltips
    pub label: String,
    pub value: u64,
}

/// A single line series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub label: String,
    pub color: String,
    pub fill: bool,
    pub points: Vec<ChartPoint>,
}

/// Display options. Both default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartOptions {
    pub show_x_axis: bool,
    pub show_legend: bool,
}

/// Everything the chart surface needs for its one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartFrame {
    pub series: ChartSeries,
    pub options: ChartOptions,
}

/// Builds the word count series from the full snapshot, in snapshot order.
pub fn render_chart(snapshot: &MetricsSnapshot) -> ChartFrame {
    let points = snapshot
        .iter()
        .map(|(agency, metrics)| ChartPoint {
            agency: agency.to_string(),
            label: display_label(agency),
            value: metrics.word_count,
        })
        .collect();

    ChartFrame {
        series: ChartSeries {
            label: CHART_SERIES_LABEL.to_string(),
            color: CHART_LINE_COLOR.to_string(),
            fill: false,
            points,
        },
        options: ChartOptions::default(),
    }
}

/// Friendly name for an agency key.
///
/// Keys produced from parsed title files read as `Title <id>`: a key that
/// starts with `title` and contains `_parsed` takes the text after `title`
/// up to the first `_` (or the next `title`) as its id, so
/// `title12_parsed.json` and `title12_parsed_v2.json` both read `Title 12`.
/// Every other key, and one with an empty id, is returned unchanged.
pub fn display_label(agency: &str) -> String {
    let id = agency
        .strip_prefix("title")
        .filter(|_| agency.contains("_parsed"))
        .and_then(|rest| rest.split("title").next())
        .and_then(|segment| segment.split('_').next())
        .filter(|id| !id.is_empty());

    match id {
        Some(id) => format!("Title {}", id),
        None => agency.to_string(),
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A point mapped onto the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: u64,
}

/// A horizontal y-axis gridline.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub value: u64,
    /// Value with thousands separators
    pub label: String,
}

/// A series laid out in surface coordinates (origin top-left).
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedChart {
    pub points: Vec<PlottedPoint>,
    pub y_ticks: Vec<AxisTick>,
    pub y_max: u64,
}

impl PlottedPoint {
    /// Hover text, e.g. "Title 1: 3,400".
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.label, format_count(self.value))
    }
}

impl PlottedChart {
    /// Points formatted for an SVG `polyline`.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new(CHART_WIDTH, CHART_HEIGHT, CHART_PADDING)
    }
}

impl ChartLayout {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// Bottom edge of the plot area, where zero sits.
    pub fn baseline(&self) -> f64 {
        self.padding + self.plot_height()
    }

    /// Lays the series out across the plot area.
    ///
    /// Points are spread evenly left to right; a single point is centred.
    /// The y axis starts at zero and ends on a rounded step above the
    /// largest value.
    pub fn plot(&self, series: &ChartSeries) -> PlottedChart {
        let max_value = series.points.iter().map(|p| p.value).max().unwrap_or(0);
        let step = nice_step(max_value, CHART_Y_TICKS);
        let y_max = step.saturating_mul(CHART_Y_TICKS as u64);

        let count = series.points.len();
        let points = series
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| PlottedPoint {
                x: self.x_for(i, count),
                y: self.y_for(point.value, y_max),
                label: point.label.clone(),
                value: point.value,
            })
            .collect();

        let y_ticks = (0..=CHART_Y_TICKS as u64)
            .map(|i| {
                let value = step.saturating_mul(i);
                AxisTick {
                    y: self.y_for(value, y_max),
                    value,
                    label: format_count(value),
                }
            })
            .collect();

        PlottedChart {
            points,
            y_ticks,
            y_max,
        }
    }

    fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.padding + self.plot_width() / 2.0;
        }
        self.padding + self.plot_width() * index as f64 / (count - 1) as f64
    }

    fn y_for(&self, value: u64, y_max: u64) -> f64 {
        let ratio = if y_max == 0 {
            0.0
        } else {
            value as f64 / y_max as f64
        };
        self.baseline() - self.plot_height() * ratio
    }
}

/// Smallest 1/2/5 × 10^k step such that `ticks` steps cover `max_value`.
///
/// Capped so `step * ticks` never exceeds `u64::MAX`.
fn nice_step(max_value: u64, ticks: usize) -> u64 {
    if max_value == 0 || ticks == 0 {
        return 1;
    }

    let ticks_u64 = ticks as u64;
    let raw = max_value as f64 / ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    let step = ((nice * magnitude).ceil() as u64).max(1);
    // Float rounding can land one step short on very large values
    let step = if step.saturating_mul(ticks_u64) < max_value {
        max_value.div_ceil(ticks_u64)
    } else {
        step
    };
    step.min(u64::MAX / ticks_u64)
}
