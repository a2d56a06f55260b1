//! Scryfall pagination
//!
//! Pages are requested one at a time, with a fixed pause before every call,
//! until the API reports no more pages or the page cap is reached. Any failed
//! request aborts the whole fetch; there is no retry.

mod client;
mod paginator;
pub mod worker;

use std::fmt;
use std::future::Future;

use thiserror::Error;

use crate::card::CardList;

pub use client::ScryfallClient;
pub use paginator::{FetchOptions, FetchOutcome, fetch_all_cards};
pub use worker::{FetchEvent, FetchHandle, fetch_blocking, spawn_fetch};

/// Errors that can occur while paging through search results
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The query is valid but matched nothing (404 `not_found`)
    #[error("No cards found.")]
    NoMatches,

    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the API's `details` when it sent one
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("Fetch cancelled")]
    Cancelled,
}

/// Anything that can serve one page of search results for a URL
pub trait PageSource {
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<CardList, FetchError>>;
}

/// Progress after each page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    pub pages: usize,
    pub cards: usize,
}

impl fmt::Display for FetchProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fetching page {}... Found {} cards", self.pages, self.cards)
    }
}
