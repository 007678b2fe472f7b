//! Species aggregation
//!
//! Groups clean records by species and finds the species with the largest
//! mean length.

use crate::app::models::{CleanRecord, SpeciesAggregate};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Running sum for one species while grouping
#[derive(Debug)]
struct SpeciesAccumulator<'a> {
    species: &'a str,
    total_length: f64,
    count: usize,
}

/// Mean length per species, in the order each species was first seen
///
/// Grouping is exact and case-sensitive on the species string.
pub fn aggregate_by_species(records: &[CleanRecord]) -> Vec<SpeciesAggregate> {
    let mut groups: Vec<SpeciesAccumulator<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.species()).or_insert_with(|| {
            groups.push(SpeciesAccumulator {
                species: record.species(),
                total_length: 0.0,
                count: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_length += record.length();
        group.count += 1;
    }

    groups
        .into_iter()
        .map(|group| SpeciesAggregate {
            species: group.species.to_string(),
            mean_length: group.total_length / group.count as f64,
            count: group.count,
        })
        .collect()
}

/// Pick the aggregate with the largest mean
///
/// Ties go to the aggregate that comes first, i.e. the species seen first in
/// the input. Returns `None` for an empty slice.
pub fn select_largest(aggregates: &[SpeciesAggregate]) -> Option<&SpeciesAggregate> {
    aggregates.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.mean_length <= current.mean_length => Some(current),
        _ => Some(candidate),
    })
}

/// Pick the aggregate with the largest mean, failing when there is none
///
/// A mean over zero records is undefined, so an empty slice is an empty
/// input error rather than a missing answer.
pub fn largest_average(aggregates: &[SpeciesAggregate]) -> Result<&SpeciesAggregate> {
    select_largest(aggregates).ok_or_else(|| {
        Error::empty_input("No valid records with a species remain; cannot compute average lengths")
    })
}

/// Find the species with the largest mean length
pub fn find_largest_average_species(records: &[CleanRecord]) -> Result<SpeciesAggregate> {
    let aggregates = aggregate_by_species(records);
    debug!("Computed {} species aggregates", aggregates.len());

    largest_average(&aggregates).cloned()
}
