//! Table projection.
//!
//! The table renderer replaces every visible row on each call. This module
//! turns a [`FilteredView`] into the complete row set, already formatted as
//! display text, so the UI layer only has to lay cells out.

use crate::config::READABILITY_DECIMALS;
use crate::filter::FilteredView;
use crate::snapshot::{AgencyMetrics, MetricsSnapshot};
use crate::summary::ViewSummary;

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub agency: String,
    pub word_count: String,
    pub checksum: String,
    pub readability: String,
}

impl TableRow {
    pub fn from_entry(agency: &str, metrics: &AgencyMetrics) -> Self {
        Self {
            agency: agency.to_string(),
            word_count: metrics.word_count.to_string(),
            checksum: metrics.checksum.clone(),
            readability: format_readability(metrics.readability),
        }
    }

    /// Cells in column order: agency, words, checksum, readability.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.agency.as_str(),
            self.word_count.as_str(),
            self.checksum.as_str(),
            self.readability.as_str(),
        ]
    }
}

/// Complete contents of the metrics table for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFrame {
    pub rows: Vec<TableRow>,
    pub summary: ViewSummary,
}

/// Formats a readability score with exactly two decimals.
///
/// A value exactly halfway between two hundredths rounds away from zero
/// (`0.125` shows as `0.13`), as the browser's `toFixed` does. Anything
/// else takes the nearest hundredth of its exact binary value.
pub fn format_readability(value: f64) -> String {
    // Avoid "-0.00" for a negative zero score
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", READABILITY_DECIMALS, round_half_away(value))
}

/// Resolves exact ties at `READABILITY_DECIMALS` away from zero.
///
/// A tie is `(2k + 1) / (2 * 10^d)`. For a binary float that holds exactly
/// when `value * 2^(d + 1)` is an odd integer, and that product is exact.
fn round_half_away(value: f64) -> f64 {
    let decimals = READABILITY_DECIMALS as i32;
    let halves = value * 2f64.powi(decimals + 1);
    if !halves.is_finite() || halves.fract() != 0.0 || halves % 2.0 == 0.0 {
        return value;
    }

    let scale = 10f64.powi(decimals);
    // f64::round already breaks ties away from zero
    (value * scale).round() / scale
}

/// One row per view entry, in view order.
pub fn table_rows(view: &FilteredView<'_>) -> Vec<TableRow> {
    view.iter()
        .map(|(agency, metrics)| TableRow::from_entry(agency, metrics))
        .collect()
}

/// Renders a view into a full replacement frame for the table.
pub fn render_table(view: &FilteredView<'_>, snapshot: &MetricsSnapshot) -> TableFrame {
    TableFrame {
        rows: table_rows(view),
        summary: ViewSummary::from_view(view, snapshot),
    }
}
