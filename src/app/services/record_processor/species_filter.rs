//! Species filtering
//!
//! Drops normalized records without a species. Dropping is not an error;
//! an empty result is left for the aggregator to reject.

use crate::app::models::{CleanRecord, NormalizedRecord};
use crate::Result;
use tracing::{debug, info};

/// Keep records that have a non-empty species, in input order
///
/// Returns the clean records and the number of records dropped.
pub fn filter_missing_species(records: Vec<NormalizedRecord>) -> Result<(Vec<CleanRecord>, usize)> {
    let total = records.len();
    let mut clean = Vec::with_capacity(total);

    for record in records {
        // Whitespace-only counts as missing; other values are kept verbatim
        match record.species.filter(|s| !s.trim().is_empty()) {
            Some(species) => clean.push(CleanRecord::new(record.name, species, record.length)?),
            None => debug!("Record '{}' dropped: no species", record.name),
        }
    }

    let dropped = total - clean.len();
    info!(
        "Species filtering complete: {} -> {} records ({} dropped)",
        total,
        clean.len(),
        dropped
    );

    Ok((clean, dropped))
}
