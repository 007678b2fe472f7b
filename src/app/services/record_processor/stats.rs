//! Processing statistics and result structures for record processing
//!
//! Tracks how many rows were read, defaulted and dropped on the way from raw
//! records to clean records.

use crate::app::models::CleanRecord;

/// Statistics for record processing operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Number of raw input records
    pub total_input: usize,
    /// Number of lengths replaced by the configured default
    pub defaulted_lengths: usize,
    /// Number of records dropped for having no species
    pub missing_species: usize,
    /// Final number of clean records
    pub clean_records: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of input records that survived cleaning
    pub fn retention_rate(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            (self.clean_records as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Get summary of processing statistics
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} -> {} records ({:.1}% retained) | \
             Defaulted lengths: {} | Missing species: {}",
            self.total_input,
            self.clean_records,
            self.retention_rate(),
            self.defaulted_lengths,
            self.missing_species
        )
    }
}

/// Result of record processing operations
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Records ready for aggregation
    pub records: Vec<CleanRecord>,
    /// Processing statistics
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    pub fn new(records: Vec<CleanRecord>, stats: ProcessingStats) -> Self {
        Self { records, stats }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
