//! CSV format sniffing
//!
//! Inspects a sample from the start of a file to decide whether it looks
//! like delimited text with the expected header, and which delimiter it uses.

use crate::config::AnalysisConfig;
use crate::constants::{CANDIDATE_DELIMITERS, CSV_EXTENSION, QUOTE_CHAR, REQUIRED_COLUMNS};
use crate::{Error, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// What sniffing learned about a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniffReport {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Header column names, trimmed, in file order
    pub columns: Vec<String>,
}

/// Validate that `path` points at a CSV file the loader can read
///
/// Checks existence, the `.csv` extension (unless disabled), the delimiter
/// and the presence of the required header columns.
pub fn validate_csv_file(path: &Path, config: &AnalysisConfig) -> Result<SniffReport> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    if config.require_csv_extension && !has_csv_extension(path) {
        return Err(Error::csv_format(
            path,
            format!(
                "file does not end in .{}; please verify the file extension",
                CSV_EXTENSION
            ),
        ));
    }

    let (sample, truncated) = read_sample(path, config.sniff_sample_bytes)?;
    let report =
        sniff_sample(&sample, truncated).map_err(|reason| Error::csv_format(path, reason))?;

    info!(
        "CSV file looks valid: {} ({} columns, {} delimited)",
        path.display(),
        report.columns.len(),
        crate::constants::delimiter_name(report.delimiter)
    );
    Ok(report)
}

/// Check the file extension case-insensitively
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}

/// Read at most `max_bytes` from the start of the file as text
///
/// Also reports whether the file continues past the sample.
fn read_sample(path: &Path, max_bytes: usize) -> Result<(String, bool)> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Unable to open {}", path.display()), e))?;
    let file_len = file
        .metadata()
        .map_err(|e| Error::io(format!("Unable to read metadata for {}", path.display()), e))?
        .len();

    let mut buffer = Vec::with_capacity(max_bytes);
    file.take(max_bytes as u64)
        .read_to_end(&mut buffer)
        .map_err(|e| Error::io(format!("Unable to read {}", path.display()), e))?;

    // A sample cut mid-character only loses its last partial character
    let text = match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(e) => {
            let valid_up_to = e.utf8_error().valid_up_to();
            let bytes = e.into_bytes();
            if bytes.len() - valid_up_to >= 4 {
                return Err(Error::csv_format(path, "file is not valid UTF-8 text"));
            }
            String::from_utf8_lossy(&bytes[..valid_up_to]).into_owned()
        }
    };

    Ok((text, file_len > max_bytes as u64))
}

/// Sniff delimiter and header from a text sample
///
/// `truncated` says the sample stops before the end of the file, in which
/// case its last record may be incomplete and is not checked. Returns a
/// human-readable reason when the sample does not look like a usable CSV
/// file.
pub fn sniff_sample(sample: &str, truncated: bool) -> std::result::Result<SniffReport, String> {
    if sample.trim().is_empty() {
        return Err("file is empty".to_string());
    }

    let (delimiter, header) = CANDIDATE_DELIMITERS
        .iter()
        .copied()
        .find_map(|delimiter| {
            consistent_header(sample, delimiter, truncated).map(|header| (delimiter, header))
        })
        .ok_or_else(|| "could not determine a consistent field delimiter".to_string())?;
    debug!("Detected delimiter {:?}", delimiter as char);

    let columns: Vec<String> = header
        .iter()
        .map(|column| column.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|column| column == required))
        .collect();

    if !missing.is_empty() {
        return Err(format!(
            "header is missing required column(s): {}",
            missing.join(", ")
        ));
    }

    Ok(SniffReport { delimiter, columns })
}

/// Parse the sample with one delimiter and return its header if every record has the same width
///
/// A header with a single field means the delimiter never occurs, so it is rejected too.
fn consistent_header(sample: &str, delimiter: u8, truncated: bool) -> Option<StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quote(QUOTE_CHAR)
        .has_headers(true)
        .flexible(false)
        .from_reader(sample.as_bytes());

    let header = reader.headers().ok()?.clone();
    if header.len() < 2 {
        return None;
    }

    let mut records: Vec<csv::Result<StringRecord>> = reader.records().collect();
    if truncated {
        records.pop();
    }

    match records.into_iter().find_map(|record| record.err()) {
        Some(e) => {
            debug!("Delimiter {:?} rejected: {}", delimiter as char, e);
            None
        }
        None => Some(header),
    }
}
