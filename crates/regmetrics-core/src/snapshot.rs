//! Metrics snapshot: the full set of per-agency metrics from one fetch.
//!
//! A snapshot keeps agencies in the order the endpoint sent them. The
//! entries sit behind an `Arc`, so the store, the controller and the chart
//! share one immutable copy for the whole session.

use crate::error::LoadError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Text metrics for a single agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyMetrics {
    /// Total words in the agency's text
    pub word_count: u64,
    /// Opaque content hash, displayed verbatim
    pub checksum: String,
    /// Precomputed readability score
    pub readability: f64,
}

/// Immutable, insertion-ordered mapping from agency name to metrics.
///
/// Agency names are case-sensitive and unique. Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    entries: Arc<IndexMap<String, AgencyMetrics>>,
}

impl MetricsSnapshot {
    /// Parses a response body into a snapshot.
    ///
    /// The body must be a JSON object whose values carry `word_count`,
    /// `checksum` and `readability`. A repeated key keeps its first
    /// position and its last value.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Builds a snapshot from entries in the given order.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, AgencyMetrics)>,
        K: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(agency, metrics)| (agency.into(), metrics))
            .collect();
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, agency: &str) -> Option<&AgencyMetrics> {
        self.entries.get(agency)
    }

    pub fn contains(&self, agency: &str) -> bool {
        self.entries.contains_key(agency)
    }

    /// Iterates entries in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AgencyMetrics)> {
        self.entries
            .iter()
            .map(|(agency, metrics)| (agency.as_str(), metrics))
    }

    /// Agency names in arrival order.
    pub fn agencies(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// True when both handles point at the same loaded data.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<'de> Deserialize<'de> for MetricsSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = IndexMap::<String, AgencyMetrics>::deserialize(deserializer)?;
        Ok(Self {
            entries: Arc::new(entries),
        })
    }
}

impl Serialize for MetricsSnapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}
