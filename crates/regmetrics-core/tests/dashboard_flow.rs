//! End-to-end tests for the load → filter → render flow.
//!
//! Each test plays the part of the UI: it loads through a fresh
//! [`MetricsStore`], feeds the outcome to an [`InputController`], and keeps
//! the table rows and chart the way a page would, by applying every
//! [`RenderCommand`] in order.

use regmetrics_core::chart::ChartFrame;
use regmetrics_core::controller::{DashboardEvent, InputController, RenderCommand};
use regmetrics_core::source::StaticMetricsSource;
use regmetrics_core::store::MetricsStore;
use regmetrics_core::table::TableRow;
use regmetrics_core::LoadError;

// ============================================================================
// Test Page
// ============================================================================

/// Minimal stand-in for the page: a table body and a chart surface.
#[derive(Default)]
struct TestPage {
    controller: InputController,
    rows: Vec<TableRow>,
    chart: Option<ChartFrame>,
    chart_renders: usize,
}

impl TestPage {
    async fn load(&mut self, store: &MetricsStore, source: &StaticMetricsSource) {
        let event = match store.load(source).await {
            Ok(snapshot) => DashboardEvent::Loaded(snapshot),
            Err(e) => DashboardEvent::LoadFailed(e),
        };
        self.dispatch(event);
    }

    fn type_query(&mut self, query: &str) {
        self.dispatch(DashboardEvent::QueryChanged(query.to_string()));
    }

    fn dispatch(&mut self, event: DashboardEvent) {
        for command in self.controller.handle(event) {
            match command {
                RenderCommand::Table(frame) => self.rows = frame.rows,
                RenderCommand::Chart(frame) => {
                    self.chart = Some(frame);
                    self.chart_renders += 1;
                }
            }
        }
    }

    fn row_cells(&self) -> Vec<[&str; 4]> {
        self.rows.iter().map(TableRow::cells).collect()
    }

    fn chart_agencies(&self) -> Vec<&str> {
        self.chart
            .as_ref()
            .map(|c| c.series.points.iter().map(|p| p.agency.as_str()).collect())
            .unwrap_or_default()
    }
}

const TWO_AGENCIES: &str = r#"{
    "EPA": {"word_count": 1200, "checksum": "abc123", "readability": 45.678},
    "FDA": {"word_count": 800, "checksum": "def456", "readability": 50}
}"#;

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_single_agency_row_after_load() {
    let store = MetricsStore::new();
    let source = StaticMetricsSource::ok(
        r#"{"EPA": {"word_count": 1200, "checksum": "abc123", "readability": 45.678}}"#,
    );
    let mut page = TestPage::default();

    page.load(&store, &source).await;

    assert_eq!(page.row_cells(), vec![["EPA", "1200", "abc123", "45.68"]]);
    assert_eq!(page.chart_agencies(), vec!["EPA"]);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_filter_narrows_table_but_not_chart() {
    let store = MetricsStore::new();
    let source = StaticMetricsSource::ok(TWO_AGENCIES);
    let mut page = TestPage::default();

    page.load(&store, &source).await;
    page.type_query("e");
    page.type_query("ep");

    assert_eq!(page.row_cells(), vec![["EPA", "1200", "abc123", "45.68"]]);
    assert_eq!(page.chart_agencies(), vec!["EPA", "FDA"]);
    assert_eq!(page.chart_renders, 1);
}

#[tokio::test]
async fn test_failed_fetch_leaves_page_empty() {
    let store = MetricsStore::new();
    let source = StaticMetricsSource::failing(LoadError::Transport("network down".into()));
    let mut page = TestPage::default();

    page.load(&store, &source).await;
    page.type_query("epa");

    assert!(page.rows.is_empty());
    assert!(page.chart.is_none());
    assert_eq!(page.chart_renders, 0);
    assert!(!page.controller.is_loaded());
}

#[tokio::test]
async fn test_unmatched_query_renders_zero_rows() {
    let store = MetricsStore::new();
    let source = StaticMetricsSource::ok(TWO_AGENCIES);
    let mut page = TestPage::default();

    page.load(&store, &source).await;
    page.type_query("zzz");

    assert!(page.rows.is_empty());
    assert_eq!(page.chart_agencies(), vec!["EPA", "FDA"]);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_clearing_query_restores_every_row_in_order() {
    let store = MetricsStore::new();
    let source = StaticMetricsSource::ok(TWO_AGENCIES);
    let mut page = TestPage::default();

    page.load(&store, &source).await;
    page.type_query("FD");
    assert_eq!(page.rows.len(), 1);

    page.type_query("");
    assert_eq!(
        page.row_cells(),
        vec![
            ["EPA", "1200", "abc123", "45.68"],
            ["FDA", "800", "def456", "50.00"],
        ]
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_load_failure() {
    let store = MetricsStore::new();
    let source = StaticMetricsSource::ok("<html>502 Bad Gateway</html>");
    let mut page = TestPage::default();

    page.load(&store, &source).await;

    assert!(page.rows.is_empty());
    assert!(page.chart.is_none());
    assert!(store.snapshot().is_none());
}

#[tokio::test]
async fn test_reload_within_session_does_not_refetch() {
    let store = MetricsStore::new();
    let source = StaticMetricsSource::ok(TWO_AGENCIES);
    let mut page = TestPage::default();

    page.load(&store, &source).await;
    page.load(&store, &source).await;

    assert_eq!(source.fetch_count(), 1);
    assert_eq!(page.chart_renders, 1);
}
