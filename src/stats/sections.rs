//! Display-ready statistics
//!
//! Sorts and truncates each tally into a titled section with percentages of
//! the total card count.

use serde::Serialize;

use super::aggregate::process_cards;
use super::tally::Tally;
use super::types::CardStats;
use crate::fetch::FetchOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub count: usize,
    /// Share of all fetched cards, 0–100
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSection {
    pub title: String,
    pub entries: Vec<StatEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub query: String,
    pub total_cards: usize,
    /// What the API says the query matches, which can exceed `total_cards`
    /// when the page cap kicked in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_available: Option<u64>,
    pub was_limited: bool,
    pub max_pages: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub sections: Vec<StatSection>,
}

impl StatsReport {
    pub fn from_outcome(query: &str, outcome: &FetchOutcome, max_pages: usize, top_n: usize) -> Self {
        let stats = process_cards(&outcome.cards);
        let mut report = Self::build(query, &stats, top_n);
        report.total_available = outcome.total_available;
        report.was_limited = outcome.was_limited;
        report.max_pages = max_pages;
        report.warnings = outcome.warnings.clone();
        report
    }

    /// Sections in display order; empty tables are left out.
    /// The mana curve keeps every value, in ascending order.
    pub fn build(query: &str, stats: &CardStats, top_n: usize) -> Self {
        let total = stats.total;
        let top = |title: &str, tally: &Tally| {
            section(format!("Top {} {}", top_n, title), tally.top(top_n), total, None)
        };

        let sections = vec![
            top("Color Identities", &stats.identities),
            top("Card Types", &stats.types),
            section(
                "Mana Curve".to_string(),
                stats.mana_values.sorted_numeric(),
                total,
                Some("CMC "),
            ),
            top("Rarities", &stats.rarities),
            top("Creature Types", &stats.creature_types),
            top("Keywords", &stats.keywords),
        ]
        .into_iter()
        .filter(|s| !s.entries.is_empty())
        .collect();

        Self {
            query: query.to_string(),
            total_cards: total,
            total_available: None,
            was_limited: false,
            max_pages: 0,
            warnings: Vec::new(),
            sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_cards == 0
    }

    pub fn limit_note(&self) -> Option<String> {
        self.was_limited
            .then(|| format!("Note: Results capped at {} pages.", self.max_pages))
    }
}

fn section(
    title: String,
    rows: Vec<(String, usize)>,
    total: usize,
    label_prefix: Option<&str>,
) -> StatSection {
    let entries = rows
        .into_iter()
        .map(|(key, count)| StatEntry {
            label: match label_prefix {
                Some(prefix) => format!("{}{}", prefix, key),
                None => key,
            },
            count,
            percent: percent_of(count, total),
        })
        .collect();
    StatSection { title, entries }
}

/// Share in percent, already rounded to tenths with halves going up
fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let tenths = (count as u64 * 2000 + total as u64) / (2 * total as u64);
    tenths as f64 / 10.0
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod sections_tests;
