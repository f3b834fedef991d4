//! UI components for the regmetrics dashboard.
//!
//! - `app_shell`: AppBar, StatusStrip, Footer
//! - `dashboard`: SearchField, MetricsTable, WordCountChart
//!
//! # Data Flow
//!
//! [`App`] owns the page state as signals and registers two handlers once:
//!
//! 1. A load effect that runs the session's single fetch through
//!    [`session_store`] and reports the outcome as a [`DashboardEvent`].
//! 2. A dashboard coroutine that owns the [`InputController`], receives
//!    every event (load outcome, each keystroke) and applies the resulting
//!    [`RenderCommand`]s to the table and chart signals.
//!
//! Components below only display those signals.
//!
//! # Context Providers
//!
//! ```ignore
//! let status = use_load_status();
//! match status.read().clone() {
//!     LoadStatus::Ready { agency_count } => { /* ... */ }
//!     LoadStatus::Pending | LoadStatus::Loading => { /* ... */ }
//!     LoadStatus::Failed(err) => { /* ... */ }
//! }
//! ```

mod app_shell;
mod dashboard;

pub use app_shell::{AppBar, Footer, StatusStrip};
pub use dashboard::{MetricsTable, SearchField, WordCountChart};

use crate::fetcher::HttpMetricsSource;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use regmetrics_core::chart::ChartFrame;
use regmetrics_core::controller::{DashboardEvent, InputController, RenderCommand};
use regmetrics_core::store::session_store;
use regmetrics_core::summary::ViewSummary;
use regmetrics_core::table::TableRow;

/// Load progress for the app bar.
///
/// Presentation only: the dashboard itself is Unloaded in every state but
/// `Ready`.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    /// Fetch not started yet
    Pending,
    /// Fetch in flight
    Loading,
    /// Snapshot installed
    Ready { agency_count: usize },
    /// The session's only fetch failed
    Failed(String),
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready { .. })
    }
}

// Load status context provider
pub fn use_load_status() -> Signal<LoadStatus> {
    use_context::<Signal<LoadStatus>>()
}

#[component]
pub fn App() -> Element {
    let load_status = use_signal(|| LoadStatus::Pending);
    use_context_provider(|| load_status);

    // Page state written only by render commands
    let table_rows = use_signal(Vec::<TableRow>::new);
    let view_summary = use_signal(|| None::<ViewSummary>);
    let chart_frame = use_signal(|| None::<ChartFrame>);

    let dashboard = use_coroutine({
        let mut rows = table_rows;
        let mut summary = view_summary;
        let mut chart = chart_frame;

        move |mut rx: UnboundedReceiver<DashboardEvent>| async move {
            let mut controller = InputController::new();
            while let Some(event) = rx.next().await {
                for command in controller.handle(event) {
                    match command {
                        RenderCommand::Table(frame) => {
                            rows.set(frame.rows);
                            summary.set(Some(frame.summary));
                        }
                        RenderCommand::Chart(frame) => chart.set(Some(frame)),
                    }
                }
            }
        }
    });

    let mut status_signal = load_status;
    use_effect(move || {
        if *status_signal.read() == LoadStatus::Pending {
            spawn(async move {
                status_signal.set(LoadStatus::Loading);

                let result = match HttpMetricsSource::for_platform() {
                    Ok(source) => session_store().load(&source).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(snapshot) => {
                        let agency_count = snapshot.len();
                        dashboard.send(DashboardEvent::Loaded(snapshot));
                        status_signal.set(LoadStatus::Ready { agency_count });
                    }
                    Err(e) => {
                        error!("Metrics unavailable: {}", e);
                        status_signal.set(LoadStatus::Failed(e.to_string()));
                        dashboard.send(DashboardEvent::LoadFailed(e));
                    }
                }
            });
        }
    });

    let search_enabled = load_status.read().is_ready();

    rsx! {
        div { class: "rm-app",
            AppBar {}

            main { class: "rm-main",
                SearchField {
                    enabled: search_enabled,
                    on_query: move |query: String| {
                        dashboard.send(DashboardEvent::QueryChanged(query));
                    }
                }

                StatusStrip { summary: view_summary }

                div { class: "rm-panels",
                    MetricsTable { rows: table_rows }
                    WordCountChart { frame: chart_frame }
                }
            }

            Footer {}
        }
    }
}
