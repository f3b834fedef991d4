//! Error types for regmetrics-core.
//!
//! Loading and CSV export can fail. Filtering and rendering are total over
//! any snapshot, so there is no render error type.

use thiserror::Error;

/// Errors that can occur while loading the metrics snapshot.
///
/// Any of these leaves the dashboard in its unloaded state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Network or transport failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(String),
    /// Endpoint answered with something other than 200 OK
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    /// Response body is not a metrics snapshot
    #[error("Malformed metrics body: {0}")]
    Parse(String),
    /// The single load attempt for this session has already been made
    #[error("Metrics load already attempted for this session")]
    AlreadyAttempted,
}

/// Errors from exporting the table as CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
