//! Record processor orchestrating normalization and filtering

use super::normalizer::normalize_records;
use super::species_filter::filter_missing_species;
use super::stats::{ProcessingResult, ProcessingStats};
use crate::Result;
use crate::app::models::RawRecord;
use crate::config::AnalysisConfig;
use tracing::info;

/// Turns raw loader records into clean records
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    config: AnalysisConfig,
}

impl RecordProcessor {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Normalize lengths, then drop records without a species
    ///
    /// Fails on the first invalid length; no partial result is returned.
    pub fn process_records(&self, records: &[RawRecord]) -> Result<ProcessingResult> {
        let mut stats = ProcessingStats::new();
        stats.total_input = records.len();

        let (normalized, defaulted) = normalize_records(records, &self.config)?;
        stats.defaulted_lengths = defaulted;

        let (clean, dropped) = filter_missing_species(normalized)?;
        stats.missing_species = dropped;
        stats.clean_records = clean.len();

        info!("{}", stats.summary());
        Ok(ProcessingResult::new(clean, stats))
    }
}
