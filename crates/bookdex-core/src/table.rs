use std::path::Path;

use crate::error::{BookdexError, Result};

/// Name of the identifier column the frequency report is built from.
pub const ID_COLUMN: &str = "id";

/// Read the `id` column from a CSV file with a header row.
pub fn read_id_column(path: &Path) -> Result<Vec<String>> {
    read_column(path, ID_COLUMN)
}

/// Read one named column from a CSV file, in file order.
///
/// The header row is required. A row with the wrong field count fails the
/// whole read; rows are never silently dropped.
pub fn read_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;

    let index = reader
        .headers()?
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| BookdexError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();
    for record in reader.into_records() {
        let record = record?;
        // The strict reader already rejected short rows, so the index holds.
        if let Some(value) = record.get(index) {
            values.push(value.to_string());
        }
    }
    Ok(values)
}
