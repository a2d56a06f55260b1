//! Single-line editor for starting a new search without leaving the popup

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

pub struct QueryPrompt {
    pub textarea: TextArea<'static>,
    visible: bool,
}

impl QueryPrompt {
    pub fn new() -> Self {
        Self {
            textarea: Self::fresh_textarea(""),
            visible: false,
        }
    }

    fn fresh_textarea(initial: &str) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![initial.to_string()]);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" New search (Enter to run, Esc to cancel) ")
                .border_style(Style::default().fg(theme::prompt::BORDER))
                .style(Style::default().bg(theme::prompt::BACKGROUND)),
        );
        textarea.set_style(Style::default().fg(theme::prompt::TEXT));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::prompt::CURSOR);
        textarea.move_cursor(tui_textarea::CursorMove::End);
        textarea
    }

    /// Show the prompt pre-filled with `initial`, cursor at the end
    pub fn open(&mut self, initial: &str) {
        self.textarea = Self::fresh_textarea(initial);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }
}

impl Default for QueryPrompt {
    fn default() -> Self {
        Self::new()
    }
}
