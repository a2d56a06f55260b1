//! Scryfall API records
//!
//! Only the fields the statistics read are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// One face of a multi-faced card (split, transform, modal DFC, ...)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Card {
    /// Type line used for type statistics: the front face wins on
    /// multi-faced cards.
    pub fn primary_type_line(&self) -> &str {
        self.card_faces
            .as_ref()
            .and_then(|faces| faces.first())
            .and_then(|face| face.type_line.as_deref())
            .or(self.type_line.as_deref())
            .unwrap_or("")
    }
}

/// A page of search results (`"object": "list"`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardList {
    #[serde(default)]
    pub data: Vec<Card>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub total_cards: Option<u64>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl CardList {
    /// URL of the following page, only when the API says there is one
    pub fn next_url(&self) -> Option<&str> {
        if self.has_more {
            self.next_page.as_deref()
        } else {
            None
        }
    }
}

/// Error body returned with non-2xx responses (`"object": "error"`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}
