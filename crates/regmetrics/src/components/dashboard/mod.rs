//! Dashboard components: search field, metrics table and word count chart.

mod metrics_table;
mod search_field;
mod word_count_chart;

pub use metrics_table::MetricsTable;
pub use search_field::SearchField;
pub use word_count_chart::WordCountChart;
