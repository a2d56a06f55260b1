//! Type definitions for card statistics

use super::tally::Tally;

/// One frequency table per dimension, plus the number of cards folded in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStats {
    pub total: usize,
    pub identities: Tally,
    pub mana_values: Tally,
    pub types: Tally,
    pub rarities: Tally,
    pub creature_types: Tally,
    pub keywords: Tally,
}
