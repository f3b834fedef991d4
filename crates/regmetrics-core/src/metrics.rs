//! Dashboard timing metrics with rolling averages.
//!
//! Records how long the initial load took and how long each filter pass
//! takes. Samples live in memory only and filter timings are averaged over
//! a rolling window.

use crate::config::{METRICS_MAX_SAMPLES, METRICS_WINDOW_SECS};
use instant::Instant;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// A single timing sample with timestamp.
#[derive(Clone, Debug)]
struct TimingSample {
    timestamp: Instant,
    duration_ms: f64,
}

/// Rolling statistics for a single metric.
#[derive(Debug, Default)]
struct MetricData {
    samples: VecDeque<TimingSample>,
    /// Total count since startup.
    total_count: u64,
}

impl MetricData {
    fn record(&mut self, duration_ms: f64) {
        self.total_count += 1;
        self.samples.push_back(TimingSample {
            timestamp: Instant::now(),
            duration_ms,
        });

        while self.samples.len() > METRICS_MAX_SAMPLES {
            self.samples.pop_front();
        }
    }

    fn prune(&mut self, window: Duration) {
        // Instant starts at page load on WASM, so the window may reach before it
        let cutoff = match Instant::now().checked_sub(window) {
            Some(t) => t,
            None => return,
        };

        while let Some(front) = self.samples.front() {
            if front.timestamp < cutoff {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    fn in_window(&self, window: Duration) -> impl Iterator<Item = &TimingSample> {
        let cutoff = Instant::now().checked_sub(window);
        self.samples
            .iter()
            .filter(move |s| cutoff.is_none_or(|c| s.timestamp >= c))
    }

    fn rolling_avg(&self, window: Duration) -> Option<f64> {
        let (sum, count) = self
            .in_window(window)
            .fold((0.0, 0usize), |(sum, count), s| (sum + s.duration_ms, count + 1));

        if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        }
    }

    fn rolling_count(&self, window: Duration) -> usize {
        self.in_window(window).count()
    }
}

/// Timing snapshot for UI display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimingSnapshot {
    /// Duration of the most recent successful load.
    pub load_ms: Option<f64>,
    /// Average filter pass over the window.
    pub filter_avg_ms: Option<f64>,
    /// Filter passes within the window.
    pub filter_count: usize,
    /// Filter passes since startup.
    pub total_filters: u64,
}

/// Timing metrics collector.
///
/// Cheap to clone; clones share the same samples.
#[derive(Clone, Debug)]
pub struct DashboardMetrics {
    inner: Arc<RwLock<MetricsInner>>,
    window: Duration,
}

#[derive(Debug, Default)]
struct MetricsInner {
    load_ms: Option<f64>,
    filter: MetricData,
}

impl DashboardMetrics {
    /// Collector with the default 60-second window.
    pub fn new() -> Self {
        Self::with_window(METRICS_WINDOW_SECS)
    }

    pub fn with_window(window_secs: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsInner::default())),
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn record_load(&self, duration_ms: f64) {
        if let Ok(mut inner) = self.inner.write() {
            inner.load_ms = Some(duration_ms);
        }
    }

    /// Records one filter pass and drops samples older than the window.
    pub fn record_filter(&self, duration_ms: f64) {
        if let Ok(mut inner) = self.inner.write() {
            inner.filter.prune(self.window);
            inner.filter.record(duration_ms);
        }
    }

    pub fn snapshot(&self) -> TimingSnapshot {
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(_) => return TimingSnapshot::default(),
        };

        TimingSnapshot {
            load_ms: inner.load_ms,
            filter_avg_ms: inner.filter.rolling_avg(self.window),
            filter_count: inner.filter.rolling_count(self.window),
            total_filters: inner.filter.total_count,
        }
    }
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_METRICS: Lazy<DashboardMetrics> = Lazy::new(DashboardMetrics::new);

/// Get the global metrics collector.
pub fn global_metrics() -> &'static DashboardMetrics {
    &GLOBAL_METRICS
}
