//! Word-frequency tally over repository descriptions.
//!
//! Counting quirk kept from the original behavior: a word's count is the
//! number of repeats beyond its first sighting, so `popular` reports words
//! seen at least twice.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Accumulates description words over one orchestrator lifetime.
#[derive(Debug, Clone, Default)]
pub struct WordTally {
    counts: HashMap<String, usize>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a description on spaces and tallies each word.
    pub fn observe_description(&mut self, description: &str) {
        for word in description.split(' ') {
            match self.counts.entry(word.to_owned()) {
                Entry::Occupied(mut seen) => *seen.get_mut() += 1,
                Entry::Vacant(first) => {
                    first.insert(0);
                }
            }
        }
    }

    /// Words longer than two characters seen more than once, with their
    /// repeat counts, most frequent first (ties alphabetical).
    pub fn popular(&self) -> Vec<(String, usize)> {
        let mut words: Vec<(String, usize)> = self
            .counts
            .iter()
            .filter(|(word, count)| **count > 0 && word.len() > 2)
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        words
    }
}
