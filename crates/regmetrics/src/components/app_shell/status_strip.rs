use dioxus::prelude::*;
use regmetrics_core::metrics::global_metrics;
use regmetrics_core::summary::ViewSummary;
use regmetrics_core::table::format_readability;

/// One-line summary of what the table currently shows.
///
/// Hidden until the first table render. Timings come from the rolling
/// window in [`global_metrics`].
#[component]
pub fn StatusStrip(summary: ReadSignal<Option<ViewSummary>>) -> Element {
    let summary = summary.read();
    let Some(summary) = summary.as_ref() else {
        return rsx! {};
    };

    let caption = summary.caption();
    let mean_readability = summary
        .mean_readability
        .map(format_readability)
        .unwrap_or_else(|| "-".to_string());

    let timings = global_metrics().snapshot();
    let load_ms = timings
        .load_ms
        .map(|v| format!("{:.0} ms", v))
        .unwrap_or_else(|| "-".to_string());
    let filter_avg = timings
        .filter_avg_ms
        .map(|v| format!("{:.2} ms", v))
        .unwrap_or_else(|| "-".to_string());

    let strip_class = if summary.is_filtered() {
        "rm-status-strip rm-status-strip--filtered"
    } else {
        "rm-status-strip"
    };

    rsx! {
        div { class: strip_class,
            span { class: "rm-status-caption", "{caption}" }
            span { class: "rm-status-metric",
                span { class: "rm-status-label", "Mean readability" }
                span { class: "rm-status-value", "{mean_readability}" }
            }
            span { class: "rm-status-metric",
                span { class: "rm-status-label", "Load" }
                span { class: "rm-status-value", "{load_ms}" }
            }
            span { class: "rm-status-metric", title: "Rolling 60s average",
                span { class: "rm-status-label", "Filter avg" }
                span { class: "rm-status-value", "{filter_avg}" }
            }
        }
    }
}
