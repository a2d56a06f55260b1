//! Stats module for aggregating card frequency tables
//!
//! A single pass over the fetched cards fills one tally per dimension;
//! `StatsReport` then sorts and truncates them for display.

mod aggregate;
mod sections;
mod tally;
mod types;

pub use aggregate::{color_identity_key, mana_value_key, process_cards};
pub use sections::{StatEntry, StatSection, StatsReport};
pub use tally::Tally;
pub use types::CardStats;
