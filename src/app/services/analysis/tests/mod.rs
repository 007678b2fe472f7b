//! Test utilities for analysis over clean records

use crate::app::models::CleanRecord;


/// Create a clean record, panicking on invalid fixture data
pub fn clean(name: &str, species: &str, length: f64) -> CleanRecord {
    CleanRecord::new(name, species, length).unwrap()
}

/// The three-row dataset with a clear winner on average length
pub fn create_scenario_records() -> Vec<CleanRecord> {
    vec![
        clean("Rex", "T-Rex", 12.0),
        clean("Spike", "Stegosaurus", 9.0),
        clean("Spike2", "Stegosaurus", 11.0),
    ]
}
