use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::{FetchError, FetchProgress, PageSource};
use crate::card::Card;
use crate::config::FetchConfig;

/// Limits applied to a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub max_pages: usize,
    pub request_delay: Duration,
}

impl FetchOptions {
    /// At least one page is always requested
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            max_pages: config.max_pages.max(1),
            request_delay: Duration::from_millis(config.request_delay_ms),
        }
    }
}

/// Everything collected by one search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub cards: Vec<Card>,
    /// Stopped at the page cap while the API still had more pages
    pub was_limited: bool,
    pub pages: usize,
    /// `total_cards` reported by the first page, if any
    pub total_available: Option<u64>,
    pub warnings: Vec<String>,
}

/// Follow `next_page` links from `first_url` until exhausted or capped.
///
/// The delay is awaited before every request, the first one included.
/// A `not_found` answer before any card was collected yields an empty
/// outcome; every other error aborts.
pub async fn fetch_all_cards<S: PageSource>(
    source: &S,
    first_url: &str,
    options: &FetchOptions,
    mut on_progress: impl FnMut(FetchProgress),
    cancel_token: &CancellationToken,
) -> Result<FetchOutcome, FetchError> {
    let mut outcome = FetchOutcome::default();
    let mut next_url = Some(first_url.to_string());

    while let Some(url) = next_url.take() {
        if outcome.pages >= options.max_pages {
            log::debug!("Page cap of {} reached, stopping", options.max_pages);
            outcome.was_limited = true;
            break;
        }

        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => return Err(FetchError::Cancelled),
            _ = tokio::time::sleep(options.request_delay) => {}
        }

        let result = tokio::select! {
            biased;
            _ = cancel_token.cancelled() => return Err(FetchError::Cancelled),
            result = source.fetch_page(&url) => result,
        };

        let page = match result {
            Ok(page) => page,
            Err(FetchError::NoMatches) if outcome.cards.is_empty() => {
                log::debug!("Query matched no cards");
                break;
            }
            Err(e) => {
                log::error!("Fetching {} failed: {}", url, e);
                return Err(e);
            }
        };

        if outcome.pages == 0 {
            outcome.total_available = page.total_cards;
        }
        for warning in &page.warnings {
            if !outcome.warnings.contains(warning) {
                outcome.warnings.push(warning.clone());
            }
        }

        next_url = page.next_url().map(str::to_string);
        outcome.cards.extend(page.data);
        outcome.pages += 1;

        on_progress(FetchProgress {
            pages: outcome.pages,
            cards: outcome.cards.len(),
        });
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "paginator_tests.rs"]
mod paginator_tests;
