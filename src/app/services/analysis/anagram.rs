//! Anagram grouping
//!
//! Names are anagrams when their canonical keys match: lowercased, spaces
//! removed, characters sorted by code point.

use crate::app::models::{AnagramGroup, CleanRecord};
use std::collections::HashMap;
use tracing::debug;

/// Canonical letter-sorted key for a name
///
/// Idempotent: the key of a key is the key itself.
pub fn canonical_key(name: &str) -> String {
    let mut chars: Vec<char> = name
        .to_lowercase()
        .chars()
        .filter(|&c| c != ' ')
        .collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Group names by canonical key, in first-seen order
///
/// Every key is returned, including those with a single name.
pub fn group_by_canonical_key<'a, I>(names: I) -> Vec<AnagramGroup>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<AnagramGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for name in names {
        let key = canonical_key(name);
        if key.is_empty() {
            debug!("Skipping blank name in anagram grouping");
            continue;
        }

        match index.get(&key) {
            Some(&slot) => groups[slot].names.push(name.to_string()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(AnagramGroup {
                    key,
                    names: vec![name.to_string()],
                });
            }
        }
    }

    groups
}

/// Groups of two or more clean records whose names are anagrams
///
/// Groups are ordered by the first appearance of their key; names within a
/// group keep input order and original spelling.
pub fn find_anagram_groups(records: &[CleanRecord]) -> Vec<AnagramGroup> {
    let groups: Vec<AnagramGroup> = group_by_canonical_key(records.iter().map(CleanRecord::name))
        .into_iter()
        .filter(|group| group.len() > 1)
        .collect();

    debug!("Found {} anagram groups", groups.len());
    groups
}
