//! HTTP page source backed by reqwest

use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;

use super::{FetchError, PageSource};
use crate::card::{ApiErrorBody, CardList};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ScryfallClient {
    client: Client,
}

impl ScryfallClient {
    /// Scryfall rejects requests without a descriptive User-Agent
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PageSource for ScryfallClient {
    async fn fetch_page(&self, url: &str) -> Result<CardList, FetchError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("HTTP {} from {}: {}", status, url, body);
            return Err(error_from_response(status.as_u16(), &body));
        }

        response
            .json::<CardList>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

/// Map an error response to a `FetchError`, preferring the API's own details
pub(crate) fn error_from_response(status: u16, body: &str) -> FetchError {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).unwrap_or_default();

    if status == 404 && parsed.code.as_deref() == Some("not_found") {
        return FetchError::NoMatches;
    }

    let message = parsed
        .details
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("Scryfall API error: {}", status));

    FetchError::Api { status, message }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
