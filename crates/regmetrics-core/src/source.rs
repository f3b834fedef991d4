//! Metrics source trait.
//!
//! A [`MetricsSource`] retrieves the raw metrics body from wherever the
//! platform gets it: the browser's `fetch()` on web, an HTTP client on
//! desktop. Parsing stays in [`MetricsStore`](crate::store::MetricsStore) so
//! every platform applies the same rules.

use crate::error::LoadError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Something that can fetch the metrics response body.
///
/// Implementations return `Ok(body)` only for a 200 OK response; any other
/// status is [`LoadError::Status`], a failed request is
/// [`LoadError::Transport`].
#[async_trait::async_trait(?Send)]
pub trait MetricsSource {
    /// Performs one request and returns the body text.
    async fn fetch_body(&self) -> Result<String, LoadError>;

    /// Where the metrics come from, for log messages.
    fn describe(&self) -> String;
}

/// In-memory metrics source for tests and demos.
///
/// Returns a fixed response and counts how often it was asked.
#[derive(Debug)]
pub struct StaticMetricsSource {
    response: Result<String, LoadError>,
    fetches: AtomicUsize,
}

impl StaticMetricsSource {
    /// A source that answers with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// A source whose request fails with `error`.
    pub fn failing(error: LoadError) -> Self {
        Self {
            response: Err(error),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of `fetch_body` calls so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait(?Send)]
impl MetricsSource for StaticMetricsSource {
    async fn fetch_body(&self) -> Result<String, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    fn describe(&self) -> String {
        "static metrics".to_string()
    }
}
