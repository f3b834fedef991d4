//! Dashboard state machine and input dispatch.
//!
//! The dashboard is either [`DashboardState::Unloaded`] or
//! [`DashboardState::Loaded`]. It moves to `Loaded` once, when the snapshot
//! arrives, and never leaves it. A failed load keeps it `Unloaded`.
//!
//! [`InputController::handle`] maps each [`DashboardEvent`] to the
//! [`RenderCommand`]s the UI must apply:
//!
//! | State    | Event           | Commands                         |
//! |----------|-----------------|----------------------------------|
//! | Unloaded | `Loaded`        | full table, then chart (once)    |
//! | Unloaded | `LoadFailed`    | none                             |
//! | Unloaded | `QueryChanged`  | none                             |
//! | Loaded   | `QueryChanged`  | filtered table                   |
//! | Loaded   | `Loaded`        | none (snapshot is immutable)     |
//! | Loaded   | `LoadFailed`    | none                             |
//!
//! The controller never touches the DOM, so the whole flow is testable
//! without a browser.

use crate::chart::{render_chart, ChartFrame};
use crate::error::LoadError;
use crate::filter::filter;
use crate::metrics::global_metrics;
use crate::snapshot::MetricsSnapshot;
use crate::table::{render_table, TableFrame};
use instant::Instant;
use tracing::{debug, warn};

/// Inputs to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The session snapshot finished loading
    Loaded(MetricsSnapshot),
    /// The single load attempt failed
    LoadFailed(LoadError),
    /// The search field's value changed
    QueryChanged(String),
}

/// Side effects for the UI, applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Replace every table row
    Table(TableFrame),
    /// Draw the overview chart
    Chart(ChartFrame),
}

/// Current dashboard state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    #[default]
    Unloaded,
    Loaded { snapshot: MetricsSnapshot },
}

/// Dispatches dashboard events to render commands.
#[derive(Debug, Default)]
pub struct InputController {
    state: DashboardState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, DashboardState::Loaded { .. })
    }

    /// Applies `event` and returns the renders it requires.
    pub fn handle(&mut self, event: DashboardEvent) -> Vec<RenderCommand> {
        match event {
            DashboardEvent::Loaded(snapshot) => self.on_loaded(snapshot),
            DashboardEvent::LoadFailed(error) => {
                debug!("Staying unloaded after failed load: {}", error);
                Vec::new()
            }
            DashboardEvent::QueryChanged(query) => self.on_query(&query),
        }
    }

    fn on_loaded(&mut self, snapshot: MetricsSnapshot) -> Vec<RenderCommand> {
        if self.is_loaded() {
            warn!("Ignoring second snapshot; the session snapshot is already loaded");
            return Vec::new();
        }

        let table = render_table(&filter(&snapshot, ""), &snapshot);
        let chart = render_chart(&snapshot);
        self.state = DashboardState::Loaded { snapshot };

        vec![RenderCommand::Table(table), RenderCommand::Chart(chart)]
    }

    fn on_query(&self, query: &str) -> Vec<RenderCommand> {
        let DashboardState::Loaded { snapshot } = &self.state else {
            debug!("Ignoring query {:?} before metrics are loaded", query);
            return Vec::new();
        };

        let start = Instant::now();
        let view = filter(snapshot, query);
        let frame = render_table(&view, snapshot);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        global_metrics().record_filter(elapsed_ms);

        debug!(
            "Filter {:?}: {} of {} agencies in {:.2}ms",
            query,
            frame.summary.shown,
            frame.summary.total,
            elapsed_ms
        );

        vec![RenderCommand::Table(frame)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_snapshot;

    fn table_agencies(command: &RenderCommand) -> Vec<String> {
        match command {
            RenderCommand::Table(frame) => frame.rows.iter().map(|r| r.agency.clone()).collect(),
            other => panic!("expected table command, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_unloaded() {
        let controller = InputController::new();
        assert_eq!(controller.state(), &DashboardState::Unloaded);
    }

    #[test]
    fn test_load_renders_full_table_then_chart() {
        let snapshot = sample_snapshot();
        let mut controller = InputController::new();

        let commands = controller.handle(DashboardEvent::Loaded(snapshot.clone()));
        assert_eq!(commands.len(), 2);
        assert_eq!(
            table_agencies(&commands[0]),
            snapshot.agencies().map(String::from).collect::<Vec<_>>()
        );
        match &commands[1] {
            RenderCommand::Chart(frame) => assert_eq!(frame.series.points.len(), snapshot.len()),
            other => panic!("expected chart command, got {other:?}"),
        }
        assert!(controller.is_loaded());
    }

    #[test]
    fn test_query_renders_table_only() {
        let mut controller = InputController::new();
        controller.handle(DashboardEvent::Loaded(sample_snapshot()));

        let commands = controller.handle(DashboardEvent::QueryChanged("ep".into()));
        assert_eq!(commands.len(), 1);
        assert_eq!(table_agencies(&commands[0]), vec!["EPA"]);
    }

    #[test]
    fn test_every_keystroke_rerenders() {
        let mut controller = InputController::new();
        controller.handle(DashboardEvent::Loaded(sample_snapshot()));

        let counts: Vec<usize> = ["d", "do", "doe", "do", ""]
            .iter()
            .map(|q| {
                let commands = controller.handle(DashboardEvent::QueryChanged(q.to_string()));
                table_agencies(&commands[0]).len()
            })
            .collect();
        assert_eq!(counts, vec![3, 1, 1, 1, 4]);
    }

    #[test]
    fn test_query_before_load_is_inert() {
        let mut controller = InputController::new();
        let commands = controller.handle(DashboardEvent::QueryChanged("epa".into()));
        assert!(commands.is_empty());
        assert!(!controller.is_loaded());
    }

    #[test]
    fn test_failed_load_stays_unloaded() {
        let mut controller = InputController::new();
        let commands = controller.handle(DashboardEvent::LoadFailed(LoadError::Status(502)));
        assert!(commands.is_empty());
        assert_eq!(controller.state(), &DashboardState::Unloaded);

        let commands = controller.handle(DashboardEvent::QueryChanged("".into()));
        assert!(commands.is_empty());
    }

    #[test]
    fn test_second_snapshot_is_ignored() {
        let mut controller = InputController::new();
        let first = sample_snapshot();
        controller.handle(DashboardEvent::Loaded(first.clone()));

        let commands = controller.handle(DashboardEvent::Loaded(MetricsSnapshot::default()));
        assert!(commands.is_empty());
        match controller.state() {
            DashboardState::Loaded { snapshot } => assert!(snapshot.ptr_eq(&first)),
            DashboardState::Unloaded => panic!("controller unloaded"),
        }
    }

    #[test]
    fn test_failure_after_load_keeps_loaded() {
        let mut controller = InputController::new();
        controller.handle(DashboardEvent::Loaded(sample_snapshot()));
        controller.handle(DashboardEvent::LoadFailed(LoadError::AlreadyAttempted));
        assert!(controller.is_loaded());
    }
}
