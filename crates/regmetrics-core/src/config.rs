//! Dashboard configuration constants.
//!
//! The dashboard has no config files or environment variables. Everything
//! tunable lives here so the core, the app and the tests agree on one value.
//!
//! # Usage
//!
//! ```
//! use regmetrics_core::config::{METRICS_ENDPOINT, READABILITY_DECIMALS};
//!
//! assert_eq!(METRICS_ENDPOINT, "/api/metrics");
//! assert_eq!(format!("{:.*}", READABILITY_DECIMALS, 45.678), "45.68");
//! ```

// =============================================================================
// Metrics Endpoint
// =============================================================================

/// Path of the metrics endpoint, resolved against the page origin.
pub const METRICS_ENDPOINT: &str = "/api/metrics";

/// Origin used when there is no page to resolve against (desktop builds).
///
/// Matches the development server that publishes `metrics.json`.
pub const DEFAULT_DESKTOP_ORIGIN: &str = "http://localhost:5000";

// =============================================================================
// Table
// =============================================================================

/// Digits after the decimal point for readability scores.
pub const READABILITY_DECIMALS: usize = 2;

/// Column headings, in display order.
pub const TABLE_COLUMNS: [&str; 4] = ["Agency", "Word Count", "Checksum", "Readability"];

/// File name offered for the table download.
pub const CSV_FILE_NAME: &str = "metrics.csv";

// =============================================================================
// Chart
// =============================================================================

/// Label of the single chart series.
pub const CHART_SERIES_LABEL: &str = "Word Count";

/// Stroke colour of the word count line.
pub const CHART_LINE_COLOR: &str = "#2980b9";

/// Width of the chart viewport in SVG user units.
pub const CHART_WIDTH: f64 = 640.0;

/// Height of the chart viewport in SVG user units.
pub const CHART_HEIGHT: f64 = 320.0;

/// Space reserved around the plot area (y-axis labels live in the left gutter).
pub const CHART_PADDING: f64 = 40.0;

/// Number of intervals on the y axis.
pub const CHART_Y_TICKS: usize = 5;

// =============================================================================
// Timing Metrics
// =============================================================================

/// Default window for rolling timing averages (60 seconds).
pub const METRICS_WINDOW_SECS: u64 = 60;

/// Maximum samples kept per timing metric.
pub const METRICS_MAX_SAMPLES: usize = 1000;
