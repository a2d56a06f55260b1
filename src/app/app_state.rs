use crate::clipboard::copy_to_clipboard;
use crate::config::{ClipboardBackend, Config, FetchConfig};
use crate::fetch::{FetchEvent, FetchHandle, FetchOptions, spawn_fetch};
use crate::notification::NotificationState;
use crate::query::SearchTarget;
use crate::report::render_plain;
use crate::scroll::ScrollState;
use crate::stats::StatsReport;

use super::prompt::QueryPrompt;

pub const FETCHING_MESSAGE: &str = "Fetching card data...";

/// Starts a fetch for an API URL; swapped out in tests
pub type FetchLauncher = fn(&FetchConfig, String) -> FetchHandle;

/// What the dashboard is showing
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Fetching { message: String },
    Ready(StatsReport),
    Failed(String),
}

pub struct App {
    pub target: SearchTarget,
    pub phase: Phase,
    pub fetch_config: FetchConfig,
    pub top_n: usize,
    pub clipboard_backend: ClipboardBackend,
    pub scroll: ScrollState,
    pub notification: NotificationState,
    pub prompt: QueryPrompt,
    pub should_quit: bool,
    fetch: Option<FetchHandle>,
    launcher: FetchLauncher,
}

impl App {
    pub fn new(target: SearchTarget, config: &Config) -> Self {
        Self::with_launcher(target, config, spawn_fetch)
    }

    pub fn with_launcher(target: SearchTarget, config: &Config, launcher: FetchLauncher) -> Self {
        Self {
            target,
            phase: Phase::Fetching {
                message: FETCHING_MESSAGE.to_string(),
            },
            fetch_config: config.fetch.clone(),
            top_n: config.display.top_n,
            clipboard_backend: config.clipboard.backend,
            scroll: ScrollState::new(),
            notification: NotificationState::new(),
            prompt: QueryPrompt::new(),
            should_quit: false,
            fetch: None,
            launcher,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.as_ref().is_some_and(FetchHandle::is_running)
    }

    /// Fetch the current target
    pub fn start(&mut self) {
        self.start_search(self.target.clone());
    }

    /// Replace the current search; an in-flight fetch is cancelled first
    pub fn start_search(&mut self, target: SearchTarget) {
        self.cancel_fetch();
        self.scroll.jump_to_top();
        self.target = target;

        match self.target.api_url(&self.fetch_config.api_url) {
            Ok(url) => {
                log::debug!("Starting search: {}", url);
                self.phase = Phase::Fetching {
                    message: FETCHING_MESSAGE.to_string(),
                };
                self.fetch = Some((self.launcher)(&self.fetch_config, url));
            }
            Err(e) => {
                self.phase = Phase::Failed(e.to_string());
            }
        }
    }

    /// Drain worker events (non-blocking)
    pub fn poll_fetch(&mut self) {
        while let Some(event) = self.fetch.as_mut().and_then(FetchHandle::poll) {
            match event {
                FetchEvent::Progress(progress) => {
                    self.phase = Phase::Fetching {
                        message: progress.to_string(),
                    };
                }
                FetchEvent::Complete(outcome) => {
                    let max_pages = FetchOptions::from_config(&self.fetch_config).max_pages;
                    self.phase = Phase::Ready(StatsReport::from_outcome(
                        &self.target.query,
                        &outcome,
                        max_pages,
                        self.top_n,
                    ));
                    self.fetch = None;
                }
                FetchEvent::Failed(message) => {
                    self.phase = Phase::Failed(message);
                    self.fetch = None;
                }
                FetchEvent::Cancelled => {
                    self.fetch = None;
                }
            }
        }
    }

    pub fn cancel_fetch(&mut self) {
        if let Some(handle) = self.fetch.take() {
            handle.cancel();
        }
    }

    pub fn quit(&mut self) {
        self.cancel_fetch();
        self.should_quit = true;
    }

    /// Copy the plain-text report; only available once stats are ready
    pub fn copy_report(&mut self) -> bool {
        let Phase::Ready(report) = &self.phase else {
            return false;
        };

        match copy_to_clipboard(&render_plain(report), self.clipboard_backend) {
            Ok(()) => {
                self.notification.show("Copied stats!");
                true
            }
            Err(e) => {
                self.notification.show_warning(&e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
