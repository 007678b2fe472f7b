//! Record loading for dinosaur CSV files
//!
//! This module is the collaborator that turns a file on disk into the ordered
//! raw records consumed by the analysis core. It owns everything the core
//! never sees: file existence, extension checks, delimiter sniffing and
//! header validation.
//!
//! # Architecture
//!
//! - [`sniffer`] - Sample-based CSV validation and delimiter detection
//! - [`loader`] - Polars-backed reading of rows into [`RawRecord`]s
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use dino_analyzer::AnalysisConfig;
//! use dino_analyzer::app::services::record_loader::RecordLoader;
//!
//! # fn example() -> dino_analyzer::Result<()> {
//! let loader = RecordLoader::new(AnalysisConfig::default());
//! let records = loader.load(std::path::Path::new("dinosaurs.csv"))?;
//! println!("Loaded {} records", records.len());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod sniffer;

#[cfg(test)]
pub mod tests;

pub use loader::{load_records, records_from_frame};
pub use sniffer::{SniffReport, has_csv_extension, sniff_sample, validate_csv_file};

use crate::Result;
use crate::app::models::RawRecord;
use crate::config::AnalysisConfig;
use std::path::Path;

/// Validates and loads CSV files according to an analysis configuration
#[derive(Debug, Clone)]
pub struct RecordLoader {
    config: AnalysisConfig,
}

impl RecordLoader {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Validate the file, then read all of its rows
    pub fn load(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let sniff = validate_csv_file(path, &self.config)?;
        load_records(path, &sniff)
    }
}
