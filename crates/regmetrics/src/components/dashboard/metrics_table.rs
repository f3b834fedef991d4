use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use regmetrics_core::config::{CSV_FILE_NAME, TABLE_COLUMNS};
use regmetrics_core::export::{csv_data_url, table_csv};
use regmetrics_core::table::TableRow;

/// Metrics table. The body is rebuilt from `rows` on every render.
///
/// The download link exports the rows currently shown and is hidden while
/// there are none.
#[component]
pub fn MetricsTable(rows: ReadSignal<Vec<TableRow>>) -> Element {
    let rows = rows.read();

    let download = if rows.is_empty() {
        None
    } else {
        match table_csv(&rows) {
            Ok(csv) => Some(csv_data_url(&csv)),
            Err(e) => {
                error!("CSV export failed: {}", e);
                None
            }
        }
    };

    rsx! {
        section { class: "rm-table-card",
            div { class: "rm-table-header",
                if let Some(href) = download {
                    a {
                        class: "rm-download",
                        href: "{href}",
                        download: CSV_FILE_NAME,
                        "Download Metrics Table (CSV)"
                    }
                }
            }
            table { id: "metrics-table", class: "rm-table",
                thead {
                    tr {
                        for (index, column) in TABLE_COLUMNS.iter().enumerate() {
                            th {
                                key: "{column}",
                                class: if index % 2 == 1 { "rm-cell-number" },
                                "{column}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr { key: "{row.agency}",
                            td { class: "rm-cell-agency", "{row.agency}" }
                            td { class: "rm-cell-number", "{row.word_count}" }
                            td { class: "rm-cell-checksum", "{row.checksum}" }
                            td { class: "rm-cell-number", "{row.readability}" }
                        }
                    }
                }
            }
        }
    }
}
