//! Record processing for dinosaur datasets
//!
//! This module takes the raw records produced by the loader and turns them
//! into [`CleanRecord`](crate::app::models::CleanRecord)s.
//!
//! # Processing Pipeline
//!
//! 1. **Normalization** ([`normalizer`]): remove the unit marker from each
//!    length, parse it, substitute the default for missing values. The first
//!    invalid length aborts the run.
//! 2. **Species Filtering** ([`species_filter`]): drop records without a
//!    species, preserving order.
//!
//! Statistics for both stages are collected in [`stats`].

pub mod normalizer;
pub mod processor;
pub mod species_filter;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use normalizer::{NormalizedLength, normalize_length, normalize_records};
pub use processor::RecordProcessor;
pub use species_filter::filter_missing_species;
pub use stats::{ProcessingResult, ProcessingStats};
