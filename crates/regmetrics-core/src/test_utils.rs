//! Shared fixtures for unit tests. Only compiled when running tests.

use crate::snapshot::{AgencyMetrics, MetricsSnapshot};

/// Builds one agency's metrics.
pub fn metrics(word_count: u64, checksum: &str, readability: f64) -> AgencyMetrics {
    AgencyMetrics {
        word_count,
        checksum: checksum.to_string(),
        readability,
    }
}

/// Four agencies in a deliberately unsorted order.
pub fn sample_snapshot() -> MetricsSnapshot {
    MetricsSnapshot::from_entries([
        ("FDA", metrics(3400, "f00d", 12.5)),
        ("EPA", metrics(1200, "abc123", 45.678)),
        ("Department of Agriculture", metrics(98_000, "a9", 17.0)),
        ("DOE", metrics(0, "", 0.0)),
    ])
}
