// Configuration type definitions

use serde::Deserialize;

/// Default Scryfall search endpoint
pub const DEFAULT_API_URL: &str = "https://api.scryfall.com/cards/search";

/// Scryfall serves 175 cards per page, so the cap is 1750 cards by default
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Pause before every request; Scryfall asks clients to stay under 10 req/s
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 100;

pub const DEFAULT_TOP_N: usize = 5;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Fetch configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_request_delay_ms() -> u64 {
    DEFAULT_REQUEST_DELAY_MS
}

fn default_user_agent() -> String {
    format!("scrystats/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            api_url: default_api_url(),
            max_pages: DEFAULT_MAX_PAGES,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            user_agent: default_user_agent(),
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
