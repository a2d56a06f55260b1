//! Shared test utilities for scrystats
//!
//! Card builders and an in-memory page source used across test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use std::time::{Duration, Instant};

    use crate::app::App;
    use crate::card::{Card, CardFace, CardList};
    use crate::config::{Config, FetchConfig};
    use crate::fetch::worker::spawn_with_source;
    use crate::fetch::{FetchError, FetchHandle, FetchOptions, PageSource};
    use crate::query::SearchTarget;

    pub const FIRST_URL: &str = "https://api.scryfall.com/cards/search?q=test";

    /// Helper to build a card with the fields the stats read
    pub fn card(identity: &[&str], cmc: f64, type_line: &str, rarity: &str) -> Card {
        Card {
            name: type_line.to_string(),
            color_identity: identity.iter().map(|c| c.to_string()).collect(),
            cmc,
            type_line: Some(type_line.to_string()),
            card_faces: None,
            rarity: rarity.to_string(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut card: Card, keywords: &[&str]) -> Card {
        card.keywords = keywords.iter().map(|k| k.to_string()).collect();
        card
    }

    /// Helper to build a double-faced card
    pub fn dfc(identity: &[&str], cmc: f64, front: &str, back: &str, rarity: &str) -> Card {
        Card {
            card_faces: Some(vec![
                CardFace {
                    name: "front".to_string(),
                    type_line: Some(front.to_string()),
                },
                CardFace {
                    name: "back".to_string(),
                    type_line: Some(back.to_string()),
                },
            ]),
            type_line: Some(format!("{} // {}", front, back)),
            ..card(identity, cmc, front, rarity)
        }
    }

    pub fn page_url(n: usize) -> String {
        format!("{}&page={}", FIRST_URL, n)
    }

    /// In-memory page source keyed by URL; records every URL requested
    #[derive(Debug, Clone, Default)]
    pub struct MockPages {
        pages: HashMap<String, Result<CardList, FetchError>>,
        pub requested: Arc<Mutex<Vec<String>>>,
    }

    impl MockPages {
        /// Chain of `count` pages of `per_page` identical cards starting at FIRST_URL
        pub fn chain(count: usize, per_page: usize) -> Self {
            let mut mock = Self::default();
            for n in 1..=count {
                let url = if n == 1 {
                    FIRST_URL.to_string()
                } else {
                    page_url(n)
                };
                let has_more = n < count;
                let page = CardList {
                    data: vec![card(&["R"], 1.0, "Creature — Goblin", "common"); per_page],
                    has_more,
                    next_page: has_more.then(|| page_url(n + 1)),
                    total_cards: Some((count * per_page) as u64),
                    warnings: Vec::new(),
                };
                mock.pages.insert(url, Ok(page));
            }
            mock
        }

        pub fn with_response(mut self, url: &str, response: Result<CardList, FetchError>) -> Self {
            self.pages.insert(url.to_string(), response);
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl PageSource for MockPages {
        async fn fetch_page(&self, url: &str) -> Result<CardList, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(FetchError::Network(format!("no route for {}", url))))
        }
    }

    /// Launcher serving two pages of three goblins each, without delay
    pub fn mock_launcher(_config: &FetchConfig, _url: String) -> FetchHandle {
        spawn_with_source(
            MockPages::chain(2, 3),
            FIRST_URL.to_string(),
            FetchOptions {
                max_pages: 10,
                request_delay: Duration::ZERO,
            },
        )
    }

    /// Launcher whose first request fails with an API error
    pub fn failing_launcher(_config: &FetchConfig, _url: String) -> FetchHandle {
        let source = MockPages::default().with_response(
            FIRST_URL,
            Err(FetchError::Api {
                status: 400,
                message: "All of your terms were ignored.".to_string(),
            }),
        );
        spawn_with_source(
            source,
            FIRST_URL.to_string(),
            FetchOptions {
                max_pages: 10,
                request_delay: Duration::ZERO,
            },
        )
    }

    /// Helper to create an App for `query` that fetches from `mock_launcher`
    pub fn test_app(query: &str) -> App {
        App::with_launcher(
            SearchTarget::new(query).unwrap(),
            &Config::default(),
            mock_launcher,
        )
    }

    /// Poll the app until its fetch finishes (or 5s pass)
    pub fn wait_for_fetch(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            app.poll_fetch();
            if !app.is_fetching() || Instant::now() > deadline {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}
