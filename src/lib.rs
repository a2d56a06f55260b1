//! scrystats library - Frequency statistics for Scryfall card searches
//!
//! This library exposes the core functionality of scrystats for testing purposes.

pub mod app;
pub mod card;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod fetch;
pub mod notification;
pub mod query;
pub mod report;
pub mod scroll;
pub mod stats;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use query::SearchTarget;
pub use stats::StatsReport;
