//! Test utilities for record processing
//!
//! Provides raw record fixtures and configurations shared by the
//! normalizer, filter and processor tests.

use crate::app::models::RawRecord;
use crate::config::{AnalysisConfig, SuffixPolicy};


/// Create a raw record from optional string cells
pub fn raw(name: &str, species: Option<&str>, length: Option<&str>) -> RawRecord {
    RawRecord::new(name, species, length)
}

/// The three-row dataset with a clear winner on average length
pub fn create_scenario_records() -> Vec<RawRecord> {
    vec![
        raw("Rex", Some("T-Rex"), Some("12m")),
        raw("Spike", Some("Stegosaurus"), Some("9m")),
        raw("Spike2", Some("Stegosaurus"), Some("11m")),
    ]
}

/// Default configuration (remove every marker, default length 1.0)
pub fn create_test_config() -> AnalysisConfig {
    AnalysisConfig::default()
}

/// Configuration that only trims trailing markers
pub fn create_trailing_only_config() -> AnalysisConfig {
    AnalysisConfig::default().with_suffix_policy(SuffixPolicy::TrailingOnly)
}
