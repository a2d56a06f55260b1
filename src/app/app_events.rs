use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::query::SearchTarget;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_fetch();

        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.prompt.is_visible() {
            self.handle_prompt_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll.scroll_up(1),
            KeyCode::Char('d') if ctrl => self.scroll.page_down(),
            KeyCode::Char('u') if ctrl => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll.jump_to_bottom(),
            KeyCode::Char('y') => {
                self.copy_report();
            }
            KeyCode::Char('r') => self.start(),
            KeyCode::Char('/') => {
                let current = self.target.query.clone();
                self.prompt.open(&current);
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.prompt.close(),
            KeyCode::Enter => self.submit_prompt(),
            _ => {
                self.prompt.textarea.input(key);
            }
        }
    }

    /// Run the prompt's text as a new search; rejected input keeps the prompt open
    fn submit_prompt(&mut self) {
        match SearchTarget::from_input(self.prompt.text()) {
            Ok(target) => {
                self.prompt.close();
                self.start_search(target);
            }
            Err(e) => {
                let message = e.to_string();
                let first_line = message.lines().next().unwrap_or_default();
                self.notification.show_warning(first_line);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
