//! Single-pass card aggregation

use super::types::CardStats;
use crate::card::Card;

/// Separator between supertypes/types and subtypes on a type line
const SUBTYPE_SEPARATOR: &str = " — ";

const CREATURE_MARKER: &str = "Creature —";

const COLORLESS: &str = "C";

/// Fold cards into frequency tables
pub fn process_cards(cards: &[Card]) -> CardStats {
    let mut stats = CardStats {
        total: cards.len(),
        ..CardStats::default()
    };

    for card in cards {
        stats.identities.add(&color_identity_key(&card.color_identity));
        stats.mana_values.add(&mana_value_key(card.cmc));

        let type_line = card.primary_type_line();
        let mut parts = type_line.split(SUBTYPE_SEPARATOR);
        let main_types = parts.next().unwrap_or("");
        for card_type in main_types.split(' ').filter(|t| !t.is_empty()) {
            stats.types.add(card_type);
        }

        if type_line.contains(CREATURE_MARKER)
            && let Some(subtypes) = parts.next()
        {
            for subtype in subtypes.split(' ').filter(|t| !t.is_empty()) {
                stats.creature_types.add(subtype);
            }
        }

        stats.rarities.add(&card.rarity);

        for keyword in &card.keywords {
            stats.keywords.add(keyword);
        }
    }

    stats
}

/// Color symbols sorted and concatenated (`["W", "U"]` → `"UW"`); `"C"` for none
pub fn color_identity_key(colors: &[String]) -> String {
    if colors.is_empty() {
        return COLORLESS.to_string();
    }
    let mut sorted: Vec<&str> = colors.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.concat()
}

/// Mana value as printed on the curve: `3`, `2.5`, `0`
pub fn mana_value_key(cmc: f64) -> String {
    if cmc == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }
    format!("{}", cmc)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
