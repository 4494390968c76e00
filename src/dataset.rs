/*!
CSV dataset loading.

Reads a restaurant table with at least the columns `rate`, `location`,
`rest_type`, `online_order` and `book_table`. A `name` column is picked up
when present; other columns are ignored. Rating text is stored verbatim and
only normalized when a request filters on it.
*/

use dinematch_core::{Error, Field, Record, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

const REQUIRED_COLUMNS: [Field; 5] = [
    Field::Rating,
    Field::Location,
    Field::RestaurantType,
    Field::OnlineOrder,
    Field::BookTable,
];

/// Load a CSV file from disk
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = read_csv(file)?;
    info!(path = %path.display(), records = records.len(), "dataset loaded");
    Ok(records)
}

/// Read CSV data with a header row
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    for field in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == field.column()) {
            return Err(Error::Dataset(format!(
                "missing required column '{}'",
                field.column()
            )));
        }
    }

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<Record>().enumerate() {
        // Header is line 1
        let record = result.map_err(|e| Error::Dataset(format!("row {}: {}", row + 2, e)))?;
        records.push(record);
    }
    Ok(records)
}

fn csv_error(err: csv::Error) -> Error {
    Error::Dataset(err.to_string())
}
