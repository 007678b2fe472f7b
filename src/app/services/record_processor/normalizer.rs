//! Length field normalization
//!
//! Converts loosely-typed length strings such as `"12m"` into numbers.
//! Any invalid value aborts the whole run: a single bad length is treated
//! as a sign that the dataset cannot be trusted.

use crate::app::models::{NormalizedRecord, RawRecord};
use crate::config::AnalysisConfig;
use crate::{Error, Result};
use tracing::{debug, warn};

/// Normalized length and whether the configured default was used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedLength {
    pub value: f64,
    pub defaulted: bool,
}

/// Parse a raw length field according to the configuration
///
/// Absent or empty values (after removing the unit marker) become
/// `config.default_length_m`. Non-numeric, non-finite and negative values
/// are rejected with a validation error.
pub fn normalize_length(raw: Option<&str>, config: &AnalysisConfig) -> Result<NormalizedLength> {
    let stripped = raw.map(|value| config.suffix_policy.strip(value.trim(), config.unit_suffix));

    let text = match stripped.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Ok(NormalizedLength {
                value: config.default_length_m,
                defaulted: true,
            });
        }
    };

    let value: f64 = text.parse().map_err(|_| {
        Error::validation(format!(
            "Length value '{}' is not numeric; check the dataset for non-numeric values",
            raw.unwrap_or_default()
        ))
    })?;

    if !value.is_finite() {
        return Err(Error::validation(format!(
            "Length value '{}' is not a finite number",
            raw.unwrap_or_default()
        )));
    }

    if value < 0.0 {
        return Err(Error::validation(format!(
            "Negative length value '{}' found; review the dataset for inaccuracies",
            raw.unwrap_or_default()
        )));
    }

    Ok(NormalizedLength {
        value,
        defaulted: false,
    })
}

/// Normalize the length of every record, stopping at the first invalid row
///
/// Returns the normalized records together with the number of lengths that
/// fell back to the default.
pub fn normalize_records(
    records: &[RawRecord],
    config: &AnalysisConfig,
) -> Result<(Vec<NormalizedRecord>, usize)> {
    let mut normalized = Vec::with_capacity(records.len());
    let mut defaulted = 0;

    for (index, record) in records.iter().enumerate() {
        let length = normalize_length(record.length.as_deref(), config).map_err(|e| {
            // Row numbers are 1-based data rows, excluding the header
            Error::validation(format!("Row {} ({}): {}", index + 1, record.name, e.message()))
        })?;

        if length.defaulted {
            defaulted += 1;
            debug!(
                "Row {} ({}): missing length, using default {}",
                index + 1,
                record.name,
                config.default_length_m
            );
        }

        normalized.push(NormalizedRecord {
            name: record.name.clone(),
            species: record.species.clone(),
            length: length.value,
        });
    }

    if defaulted > 0 {
        warn!(
            "{} of {} records had no length; substituted default {}m",
            defaulted,
            records.len(),
            config.default_length_m
        );
    }

    Ok((normalized, defaulted))
}
