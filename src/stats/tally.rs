//! Key → count table

use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent keys, count descending; equal counts by key
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries = self.entries();
        entries.sort_by(|(ka, a), (kb, b)| b.cmp(a).then_with(|| ka.cmp(kb)));
        entries.truncate(n);
        entries
    }

    /// All keys ordered by their numeric value; non-numeric keys sort last
    pub fn sorted_numeric(&self) -> Vec<(String, usize)> {
        let mut entries = self.entries();
        entries.sort_by(|(ka, _), (kb, _)| {
            match (ka.parse::<f64>().ok(), kb.parse::<f64>().ok()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => ka.cmp(kb),
            }
        });
        entries
    }

    fn entries(&self) -> Vec<(String, usize)> {
        self.counts
            .iter()
            .map(|(key, count)| (key.clone(), *count))
            .collect()
    }
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tally_tests;
