//! Polars-backed CSV reading
//!
//! Reads every column as a string so that loosely-typed length values such
//! as `"12m"` reach the normalizer untouched.

use super::sniffer::SniffReport;
use crate::app::models::RawRecord;
use crate::constants::{LENGTH_COLUMN, NAME_COLUMN, SPECIES_COLUMN};
use crate::{Error, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Load raw records from a sniffed CSV file, in file order
pub fn load_records(path: &Path, sniff: &SniffReport) -> Result<Vec<RawRecord>> {
    debug!(
        "Reading {} with delimiter {:?}",
        path.display(),
        sniff.delimiter as char
    );

    let delimiter = sniff.delimiter;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        // Zero inference rows reads every column as String
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| options.with_separator(delimiter))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
        .map_err(|e| Error::csv_format(path, format!("could not parse CSV data: {}", e)))?;

    let records = records_from_frame(&df).map_err(|e| match e {
        Error::Polars(source) => Error::csv_format(path, source.to_string()),
        other => other,
    })?;

    info!(
        "Loaded {} records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Convert a string-typed data frame into raw records
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<RawRecord>> {
    let names = string_column(df, NAME_COLUMN)?;
    let species = string_column(df, SPECIES_COLUMN)?;
    let lengths = string_column(df, LENGTH_COLUMN)?;

    let records = names
        .into_iter()
        .zip(species)
        .zip(lengths)
        .map(|((name, species), length)| {
            RawRecord::new(name.unwrap_or_default(), species, length)
        })
        .collect();

    Ok(records)
}

/// Find a column by its trimmed header name and view it as strings
fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .get_columns()
        .iter()
        .find(|column| column.name().as_str().trim_start_matches('\u{feff}').trim() == name)
        .ok_or_else(|| Error::Polars(PolarsError::ColumnNotFound(name.to_string().into())))?;

    Ok(column.as_materialized_series().str()?)
}
