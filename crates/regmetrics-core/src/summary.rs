//! Aggregate counts for the rows currently on screen.

use crate::filter::FilteredView;
use crate::snapshot::MetricsSnapshot;

/// Totals for a filtered view, shown next to the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSummary {
    /// Agencies in the view
    pub shown: usize,
    /// Agencies in the snapshot
    pub total: usize,
    /// Sum of word counts in the view
    pub total_words: u64,
    /// Mean readability of the view, `None` when the view is empty
    pub mean_readability: Option<f64>,
}

impl ViewSummary {
    pub fn from_view(view: &FilteredView<'_>, snapshot: &MetricsSnapshot) -> Self {
        let mut total_words = 0u64;
        let mut readability_sum = 0.0;

        for (_, metrics) in view.iter() {
            total_words = total_words.saturating_add(metrics.word_count);
            readability_sum += metrics.readability;
        }

        let shown = view.len();
        let mean_readability = if shown > 0 {
            Some(readability_sum / shown as f64)
        } else {
            None
        };

        Self {
            shown,
            total: snapshot.len(),
            total_words,
            mean_readability,
        }
    }

    /// True when the view hides at least one agency.
    pub fn is_filtered(&self) -> bool {
        self.shown < self.total
    }

    /// Human-readable caption, e.g. "Showing 1 of 2 agencies • 1,200 words".
    pub fn caption(&self) -> String {
        let noun = if self.total == 1 { "agency" } else { "agencies" };
        let words = if self.total_words == 1 { "word" } else { "words" };
        format!(
            "Showing {} of {} {} • {} {}",
            self.shown,
            self.total,
            noun,
            format_count(self.total_words),
            words
        )
    }
}

/// Formats an integer with comma thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use crate::test_utils::sample_snapshot;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1200), "1,200");
        assert_eq!(format_count(98_000), "98,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_summary_of_full_view() {
        let snapshot = sample_snapshot();
        let summary = ViewSummary::from_view(&filter(&snapshot, ""), &snapshot);
        assert_eq!(summary.shown, 4);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.total_words, 3400 + 1200 + 98_000);
        assert!(!summary.is_filtered());
        let mean = summary.mean_readability.unwrap();
        assert!((mean - (12.5 + 45.678 + 17.0) / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_of_filtered_view() {
        let snapshot = sample_snapshot();
        let summary = ViewSummary::from_view(&filter(&snapshot, "ep"), &snapshot);
        assert!(summary.is_filtered());
        assert_eq!(summary.caption(), "Showing 1 of 4 agencies • 1,200 words");
    }

    #[test]
    fn test_summary_of_empty_view() {
        let snapshot = sample_snapshot();
        let summary = ViewSummary::from_view(&filter(&snapshot, "zzz"), &snapshot);
        assert_eq!(summary.shown, 0);
        assert_eq!(summary.mean_readability, None);
    }
}
