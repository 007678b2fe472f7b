//! Analysis over clean records
//!
//! - [`aggregator`] - Mean length per species and the largest average
//! - [`anagram`] - Canonical keys and anagram name groups
//!
//! Both analyses are pure functions over an ordered slice of clean records;
//! input order decides tie-breaks and output order.

pub mod aggregator;
pub mod anagram;

#[cfg(test)]
pub mod tests;

pub use aggregator::{
    aggregate_by_species, find_largest_average_species, largest_average, select_largest,
};
pub use anagram::{canonical_key, find_anagram_groups, group_by_canonical_key};
