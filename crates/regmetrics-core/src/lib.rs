//! # regmetrics Core
//!
//! Platform-independent state and render pipeline for the regmetrics
//! dashboard: per-agency text metrics (word count, checksum, readability)
//! loaded once, filtered by agency name on every keystroke, shown as a
//! table plus a fixed word count chart.
//!
//! Nothing here touches the DOM. The UI crate feeds [`controller::DashboardEvent`]s
//! in and applies the [`controller::RenderCommand`]s that come out.
//!
//! ## Modules
//!
//! - [`snapshot`] - Metrics data model and response parsing
//! - [`store`] - Once-per-session snapshot store
//! - [`source`] - Metrics source trait and an in-memory source
//! - [`filter`] - Case-insensitive agency filter
//! - [`table`] - Table row projection and number formatting
//! - [`chart`] - Word count series and chart layout
//! - [`summary`] - Totals for the rows on screen
//! - [`export`] - CSV download of the rows on screen
//! - [`controller`] - Unloaded/Loaded state machine and event dispatch
//! - [`metrics`] - Load and filter timings with rolling averages
//! - [`config`] - Endpoint, formatting and chart constants
//! - [`error`] - Load and export errors
//!
//! ## Example
//!
//! ```
//! use regmetrics_core::controller::{DashboardEvent, InputController, RenderCommand};
//! use regmetrics_core::snapshot::MetricsSnapshot;
//!
//! let snapshot = MetricsSnapshot::from_json(
//!     r#"{"EPA": {"word_count": 1200, "checksum": "abc123", "readability": 45.678}}"#,
//! )
//! .unwrap();
//!
//! let mut controller = InputController::new();
//! let commands = controller.handle(DashboardEvent::Loaded(snapshot));
//! if let RenderCommand::Table(frame) = &commands[0] {
//!     assert_eq!(frame.rows[0].cells(), ["EPA", "1200", "abc123", "45.68"]);
//! }
//! ```

#![forbid(unsafe_code)]

pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod snapshot;
pub mod source;
pub mod store;
pub mod summary;
pub mod table;

#[cfg(test)]
mod test_utils;

pub use error::LoadError;
pub use snapshot::{AgencyMetrics, MetricsSnapshot};
