use dioxus::prelude::*;

/// Agency search input.
///
/// Reports every change, keystroke by keystroke, with no debouncing.
/// Stays disabled until the metrics are loaded.
#[component]
pub fn SearchField(enabled: bool, on_query: EventHandler<String>) -> Element {
    let mut query = use_signal(String::new);

    let placeholder = if enabled {
        "Filter by agency…"
    } else {
        "Waiting for metrics…"
    };

    rsx! {
        section { class: "rm-search-card",
            label { class: "rm-search-label", "for": "search", "Agency" }
            input {
                id: "search",
                class: "rm-search-input",
                r#type: "search",
                autocomplete: "off",
                placeholder: "{placeholder}",
                value: "{query}",
                disabled: !enabled,
                oninput: move |evt| {
                    let value = evt.value();
                    query.set(value.clone());
                    on_query.call(value);
                },
            }
        }
    }
}
