//! CSV export of the metrics table.
//!
//! Exports exactly what the table shows: the rows of the current view with
//! their display text, under the table's column headings. The app offers
//! the result as a `data:` URL download.

use crate::config::TABLE_COLUMNS;
use crate::error::ExportError;
use crate::table::TableRow;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Writes a header line plus one record per row, `\n`-terminated.
pub fn table_csv(rows: &[TableRow]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(TABLE_COLUMNS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// `data:` URL carrying `csv` as a UTF-8 text/csv document.
pub fn csv_data_url(csv: &str) -> String {
    format!(
        "data:text/csv;charset=utf-8,{}",
        utf8_percent_encode(csv, NON_ALPHANUMERIC)
    )
}
