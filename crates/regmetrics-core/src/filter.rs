//! Agency name filtering.
//!
//! [`filter`] maps a snapshot and a query string to a [`FilteredView`]:
//! the entries whose agency name contains the query, ignoring case, in
//! snapshot order. It has no state and never touches the snapshot.

use crate::snapshot::{AgencyMetrics, MetricsSnapshot};

/// Borrowed subset of a snapshot, in snapshot order.
///
/// Views are rebuilt for every query and dropped once rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    entries: Vec<(&'a str, &'a AgencyMetrics)>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a AgencyMetrics)> + '_ {
        self.entries.iter().copied()
    }

    pub fn agencies(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(agency, _)| *agency)
    }

    pub fn contains(&self, agency: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == agency)
    }
}

/// Returns the snapshot entries whose agency name contains `query`.
///
/// Matching lowercases both sides; an empty query matches everything.
pub fn filter<'a>(snapshot: &'a MetricsSnapshot, query: &str) -> FilteredView<'a> {
    let needle = query.to_lowercase();
    let entries = snapshot
        .iter()
        .filter(|(agency, _)| matches_query(agency, &needle))
        .collect();

    FilteredView { entries }
}

/// `needle` must already be lowercase.
fn matches_query(agency: &str, needle: &str) -> bool {
    needle.is_empty() || agency.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{metrics, sample_snapshot};

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let snapshot = sample_snapshot();
        let view = filter(&snapshot, "");
        let expected: Vec<&str> = snapshot.agencies().collect();
        assert_eq!(view.agencies().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let snapshot = sample_snapshot();
        let view = filter(&snapshot, "ep");
        assert_eq!(view.agencies().collect::<Vec<_>>(), vec!["EPA"]);

        let view = filter(&snapshot, "AGRICULTURE");
        assert_eq!(
            view.agencies().collect::<Vec<_>>(),
            vec!["Department of Agriculture"]
        );
    }

    #[test]
    fn test_result_partitions_snapshot() {
        let snapshot = sample_snapshot();
        for query in ["", "a", "A", "de", "zzz", "of ", "fda"] {
            let view = filter(&snapshot, query);
            let needle = query.to_lowercase();
            for agency in snapshot.agencies() {
                let matches = agency.to_lowercase().contains(&needle);
                assert_eq!(
                    view.contains(agency),
                    matches,
                    "query {query:?}, agency {agency:?}"
                );
            }
            // Matches appear in snapshot order
            let expected: Vec<&str> = snapshot
                .agencies()
                .filter(|a| a.to_lowercase().contains(&needle))
                .collect();
            assert_eq!(view.agencies().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let snapshot = sample_snapshot();
        let view = filter(&snapshot, "zzz");
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_is_pure() {
        let snapshot = sample_snapshot();
        let before = snapshot.clone();
        let first = filter(&snapshot, "d");
        let second = filter(&snapshot, "d");
        assert_eq!(first, second);
        assert_eq!(snapshot, before);
        assert_eq!(
            snapshot.agencies().collect::<Vec<_>>(),
            before.agencies().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_view_borrows_snapshot_values() {
        let snapshot = MetricsSnapshot::from_entries([("EPA", metrics(1200, "abc123", 45.678))]);
        let view = filter(&snapshot, "epa");
        let (_, value) = view.iter().next().unwrap();
        assert!(std::ptr::eq(value, snapshot.get("EPA").unwrap()));
    }

    #[test]
    fn test_unicode_lowercase() {
        let snapshot = MetricsSnapshot::from_entries([
            ("ÉCOLE", metrics(1, "a", 1.0)),
            ("Other", metrics(2, "b", 2.0)),
        ]);
        let view = filter(&snapshot, "éc");
        assert_eq!(view.agencies().collect::<Vec<_>>(), vec!["ÉCOLE"]);
    }
}
