//! Analysis pipeline orchestration.
//!
//! Runs the stages in one direction: load → normalize → filter →
//! {aggregate, group anagrams}. Each stage returns a new collection and the
//! first error ends the run without a partial result.

use crate::app::models::{AnalysisReport, RawRecord};
use crate::app::services::analysis::{aggregate_by_species, find_anagram_groups, largest_average};
use crate::app::services::record_loader::RecordLoader;
use crate::app::services::record_processor::RecordProcessor;
use crate::config::AnalysisConfig;
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Run the analysis core over raw records
pub fn analyze_records(records: &[RawRecord], config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;
    analyze_validated(records, config)
}

/// Validate and load a CSV file, then run the analysis core over its rows
pub fn analyze_file(path: &Path, config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;

    info!("Analysing {}", path.display());
    let records = RecordLoader::new(config.clone()).load(path)?;
    analyze_validated(&records, config)
}

fn analyze_validated(records: &[RawRecord], config: &AnalysisConfig) -> Result<AnalysisReport> {
    let processed = RecordProcessor::new(config.clone()).process_records(records)?;
    let clean = processed.records;

    let species_aggregates = aggregate_by_species(&clean);
    let largest = largest_average(&species_aggregates)?.clone();
    debug!(
        "Largest average: {} ({:.2}m over {} records)",
        largest.species, largest.mean_length, largest.count
    );

    let anagram_groups = find_anagram_groups(&clean);

    info!(
        "Analysis complete: {} species, {} anagram groups",
        species_aggregates.len(),
        anagram_groups.len()
    );

    Ok(AnalysisReport {
        largest_avg_species: largest.species,
        largest_avg_length: largest.mean_length,
        anagram_groups,
        species_aggregates,
    })
}
