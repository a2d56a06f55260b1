//! Search target resolution
//!
//! Turns what the user typed (a raw Scryfall query or the URL of a
//! scryfall.com search page) into the first API request URL.

use reqwest::Url;

use crate::error::ScryError;

const SCRYFALL_HOST: &str = "scryfall.com";
const SEARCH_PATH: &str = "/search";

/// A resolved card search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    pub query: String,
    /// Scryfall `unique` mode (`cards`, `art`, `prints`) carried over from a page URL
    pub unique: Option<String>,
}

impl SearchTarget {
    pub fn new(query: impl Into<String>) -> Result<Self, ScryError> {
        let query = query.into().trim().to_string();
        if query.is_empty() {
            return Err(ScryError::NoQuery);
        }
        Ok(Self {
            query,
            unique: None,
        })
    }

    /// Resolve a CLI argument: URLs are read like the search page's address
    /// bar, anything else is taken as the query itself.
    pub fn from_input(input: &str) -> Result<Self, ScryError> {
        let input = input.trim();
        if looks_like_url(input) {
            Self::from_page_url(input)
        } else {
            Self::new(input)
        }
    }

    /// Extract the query from a scryfall.com search page URL
    pub fn from_page_url(raw: &str) -> Result<Self, ScryError> {
        let with_scheme = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("https://{}", raw)
        };

        let url = Url::parse(&with_scheme).map_err(|e| ScryError::InvalidUrl(e.to_string()))?;

        let on_scryfall = url
            .host_str()
            .is_some_and(|host| host.contains(SCRYFALL_HOST));
        if !on_scryfall || !url.path().contains(SEARCH_PATH) {
            return Err(ScryError::NotSearchPage(raw.to_string()));
        }

        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        let mut target = Self::new(param("q").unwrap_or_default())?;
        target.unique = param("unique").filter(|u| !u.trim().is_empty());
        Ok(target)
    }

    pub fn with_unique(mut self, unique: Option<String>) -> Self {
        if unique.is_some() {
            self.unique = unique;
        }
        self
    }

    /// Build the first page request against the search endpoint
    pub fn api_url(&self, base: &str) -> Result<String, ScryError> {
        let mut params = vec![("q", self.query.as_str())];
        if let Some(unique) = &self.unique {
            params.push(("unique", unique.as_str()));
        }

        Url::parse_with_params(base, &params)
            .map(String::from)
            .map_err(|e| ScryError::InvalidUrl(format!("{}: {}", base, e)))
    }
}

fn looks_like_url(input: &str) -> bool {
    input.starts_with("http://")
        || input.starts_with("https://")
        || input.starts_with(SCRYFALL_HOST)
        || input.starts_with("www.scryfall.com")
}

#[cfg(test)]
#[path = "query/query_tests.rs"]
mod query_tests;
