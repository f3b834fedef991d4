use dioxus::prelude::*;

/// Footer with data source note
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "rm-footer",
            span { class: "rm-footer-text",
                "Data from the Electronic Code of Federal Regulations • Loaded once per visit."
            }
        }
    }
}
