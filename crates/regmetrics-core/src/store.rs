//! Session metrics store.
//!
//! The store holds the one snapshot a session ever sees. It is written at
//! most once, by the first successful [`MetricsStore::load`], and read any
//! number of times afterwards. There is exactly one load attempt per store:
//! a failed attempt leaves the store empty for good, and reloading the page
//! (a fresh store) is the only retry.
//!
//! The app uses the process-wide [`session_store`]; tests create their own.

use crate::error::LoadError;
use crate::metrics::global_metrics;
use crate::snapshot::MetricsSnapshot;
use crate::source::MetricsSource;
use instant::Instant;
use once_cell::sync::{Lazy, OnceCell};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

/// Single-write, many-read holder of the session snapshot.
#[derive(Debug, Default)]
pub struct MetricsStore {
    attempted: AtomicBool,
    snapshot: OnceCell<MetricsSnapshot>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches and installs the snapshot.
    ///
    /// Only the first call reaches `source`. Later calls return the
    /// installed snapshot, or [`LoadError::AlreadyAttempted`] when the first
    /// attempt failed or is still in flight. Nothing is installed unless the
    /// body parses completely.
    pub async fn load<S>(&self, source: &S) -> Result<MetricsSnapshot, LoadError>
    where
        S: MetricsSource + ?Sized,
    {
        if self.attempted.swap(true, Ordering::SeqCst) {
            return self.snapshot().ok_or(LoadError::AlreadyAttempted);
        }

        let start = Instant::now();
        let result = match source.fetch_body().await {
            Ok(body) => MetricsSnapshot::from_json(&body),
            Err(e) => Err(e),
        };
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok(snapshot) => {
                let installed = self.snapshot.get_or_init(|| snapshot).clone();
                global_metrics().record_load(elapsed_ms);
                info!(
                    "Loaded metrics for {} agencies from {} in {:.1}ms",
                    installed.len(),
                    source.describe(),
                    elapsed_ms
                );
                Ok(installed)
            }
            Err(e) => {
                error!("Failed to load metrics from {}: {}", source.describe(), e);
                Err(e)
            }
        }
    }

    /// The installed snapshot, if the load succeeded.
    pub fn snapshot(&self) -> Option<MetricsSnapshot> {
        self.snapshot.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.get().is_some()
    }
}

static SESSION_STORE: Lazy<MetricsStore> = Lazy::new(MetricsStore::new);

/// The store for this page session.
pub fn session_store() -> &'static MetricsStore {
    &SESSION_STORE
}
