use dioxus::prelude::*;

use crate::components::{use_load_status, LoadStatus};

/// Top bar with the app title and the load status pill.
#[component]
pub fn AppBar() -> Element {
    let status = use_load_status();

    let (pill_class, pill_text) = match status.read().clone() {
        LoadStatus::Pending | LoadStatus::Loading => {
            ("rm-status-pill rm-status-pill--loading", "Loading metrics…".to_string())
        }
        LoadStatus::Ready { agency_count } => {
            let noun = if agency_count == 1 { "agency" } else { "agencies" };
            (
                "rm-status-pill rm-status-pill--ready",
                format!("{} {}", agency_count, noun),
            )
        }
        LoadStatus::Failed(_) => (
            "rm-status-pill rm-status-pill--failed",
            "Metrics unavailable".to_string(),
        ),
    };

    // Full error goes into the tooltip only
    let pill_title = match &*status.read() {
        LoadStatus::Failed(err) => err.clone(),
        _ => String::new(),
    };

    rsx! {
        header { class: "rm-appbar",
            div { class: "rm-appbar-brand",
                span { class: "rm-appbar-logo", "eCFR Metrics" }
                span { class: "rm-appbar-subtitle", "Word count, checksum and readability by agency" }
            }
            span { class: pill_class, title: "{pill_title}", "{pill_text}" }
        }
    }
}
