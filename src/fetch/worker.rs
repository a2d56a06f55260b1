//! Fetch worker thread
//!
//! Runs the pagination loop on a background thread with its own
//! single-threaded tokio runtime, so the terminal UI keeps redrawing while
//! pages arrive. Events flow back over an mpsc channel and are drained with
//! a non-blocking `poll()`.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use tokio_util::sync::CancellationToken;

use super::{FetchError, FetchOptions, FetchOutcome, FetchProgress, PageSource, ScryfallClient};
use super::paginator::fetch_all_cards;
use crate::config::FetchConfig;

/// Messages from the worker to the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    Progress(FetchProgress),
    Complete(FetchOutcome),
    Failed(String),
    Cancelled,
}

impl FetchEvent {
    fn is_terminal(&self) -> bool {
        !matches!(self, FetchEvent::Progress(_))
    }
}

/// UI-side handle to a running fetch
pub struct FetchHandle {
    rx: Option<Receiver<FetchEvent>>,
    cancel_token: CancellationToken,
}

impl FetchHandle {
    /// Poll for the next event (non-blocking)
    ///
    /// Returns None while nothing new has arrived and after the fetch ended.
    pub fn poll(&mut self) -> Option<FetchEvent> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(event) => {
                if event.is_terminal() {
                    self.rx = None;
                }
                Some(event)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(FetchEvent::Failed(
                    "Fetch worker thread disconnected".to_string(),
                ))
            }
        }
    }

    /// Ask the worker to stop; it answers with `FetchEvent::Cancelled`
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.rx.is_some()
    }
}

/// Spawn a worker that pages through Scryfall starting at `first_url`
pub fn spawn_fetch(config: &FetchConfig, first_url: String) -> FetchHandle {
    let options = FetchOptions::from_config(config);
    match ScryfallClient::new(&config.user_agent) {
        Ok(client) => spawn_with_source(client, first_url, options),
        Err(e) => {
            let (tx, rx) = channel();
            let _ = tx.send(FetchEvent::Failed(e.to_string()));
            FetchHandle {
                rx: Some(rx),
                cancel_token: CancellationToken::new(),
            }
        }
    }
}

/// Spawn a worker over any page source
pub fn spawn_with_source<S>(source: S, first_url: String, options: FetchOptions) -> FetchHandle
where
    S: PageSource + Send + 'static,
{
    let (tx, rx) = channel();
    let cancel_token = CancellationToken::new();
    let worker_token = cancel_token.clone();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create tokio runtime: {}", e);
                let _ = tx.send(FetchEvent::Failed(format!("Failed to start fetch: {}", e)));
                return;
            }
        };

        let progress_tx = tx.clone();
        let result = runtime.block_on(fetch_all_cards(
            &source,
            &first_url,
            &options,
            |progress| {
                let _ = progress_tx.send(FetchEvent::Progress(progress));
            },
            &worker_token,
        ));

        let _ = tx.send(finish_event(result));
    });

    FetchHandle {
        rx: Some(rx),
        cancel_token,
    }
}

/// Run a whole fetch on the current thread (non-interactive output modes)
pub fn fetch_blocking(
    config: &FetchConfig,
    first_url: &str,
    on_progress: impl FnMut(FetchProgress),
) -> Result<FetchOutcome, FetchError> {
    let client = ScryfallClient::new(&config.user_agent)?;
    let options = FetchOptions::from_config(config);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| FetchError::Network(format!("Failed to start fetch: {}", e)))?;

    runtime.block_on(fetch_all_cards(
        &client,
        first_url,
        &options,
        on_progress,
        &CancellationToken::new(),
    ))
}

fn finish_event(result: Result<FetchOutcome, FetchError>) -> FetchEvent {
    match result {
        Ok(outcome) => {
            log::debug!(
                "Fetch complete: {} cards over {} pages (limited: {})",
                outcome.cards.len(),
                outcome.pages,
                outcome.was_limited
            );
            FetchEvent::Complete(outcome)
        }
        Err(FetchError::Cancelled) => FetchEvent::Cancelled,
        Err(e) => FetchEvent::Failed(e.to_string()),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
