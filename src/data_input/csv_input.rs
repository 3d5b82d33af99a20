// src/data_input/csv_input.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::data_input::dataset::Dataset;
use crate::error::{PlotError, Result};

/// Reads a CSV file whose header row names the columns.
///
/// Every cell must parse as a real number. Rows with an unparseable cell or
/// a wrong field count are skipped with a warning.
pub fn read_dataset(input_file_path: &Path) -> Result<Dataset> {
    let file = File::open(input_file_path)?;
    let dataset = read_dataset_from(BufReader::new(file))?;
    info!(
        "Read {} records with {} columns from '{}'.",
        dataset.n_records(),
        dataset.n_columns(),
        input_file_path.display()
    );
    Ok(dataset)
}

/// Reads CSV data from any reader. See [`read_dataset`].
pub fn read_dataset_from<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(PlotError::Shape("CSV file has no header columns".into()));
    }
    debug!("Headers found in CSV: {:?}", headers);

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for (row_index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {} due to CSV read error: {}", row_index + 1, e);
                continue;
            }
        };
        if record.len() != headers.len() {
            warn!(
                "Skipping row {}: expected {} fields, found {}",
                row_index + 1,
                headers.len(),
                record.len()
            );
            continue;
        }
        let parsed: Option<Vec<f64>> = record.iter().map(|cell| cell.parse::<f64>().ok()).collect();
        match parsed {
            Some(row) => {
                for (column, value) in columns.iter_mut().zip(row) {
                    column.push(value);
                }
            }
            None => warn!("Skipping row {} due to a non-numeric value", row_index + 1),
        }
    }

    Dataset::from_pairs(headers.into_iter().zip(columns))
}


// src/data_input/csv_input.rs
