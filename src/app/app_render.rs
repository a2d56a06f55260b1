use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use super::dashboard::dashboard_lines;
use crate::notification::render_notification;
use crate::report::REPORT_TITLE;
use crate::theme;
use crate::widgets::{popup, scrollbar};

const POPUP_WIDTH: u16 = 56;
const PROMPT_HEIGHT: u16 = 3;
pub const DASHBOARD_FOOTER: &str = " q close · y copy · r refresh · / new search ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.render_dashboard(frame);

        if self.prompt.is_visible() {
            let area = popup::bottom_strip(frame.area(), PROMPT_HEIGHT);
            popup::clear_area(frame, area);
            frame.render_widget(&self.prompt.textarea, area);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_dashboard(&mut self, frame: &mut Frame) {
        let frame_area = frame.area();
        let lines = dashboard_lines(&self.phase);

        // Borders plus content, leaving room for the prompt strip below
        let wanted_height = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let max_height = frame_area.height.saturating_sub(PROMPT_HEIGHT + 1).max(3);
        let popup_area = popup::centered_popup(
            frame_area,
            POPUP_WIDTH.min(frame_area.width.saturating_sub(2)),
            wanted_height.min(max_height),
        );
        popup::clear_area(frame, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", REPORT_TITLE),
                theme::dashboard::TITLE,
            ))
            .title_bottom(
                Line::from(Span::styled(
                    DASHBOARD_FOOTER,
                    Style::default().fg(theme::dashboard::FOOTER),
                ))
                .centered(),
            )
            .border_style(Style::default().fg(theme::dashboard::BORDER))
            .style(Style::default().bg(theme::dashboard::BACKGROUND));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let content_height = lines.len();
        self.scroll.update_bounds(content_height as u32, inner.height);

        let paragraph = Paragraph::new(Text::from(lines)).scroll((self.scroll.offset, 0));
        frame.render_widget(paragraph, inner);

        let scrollbar_area = Rect {
            x: popup_area.x,
            y: popup_area.y.saturating_add(1),
            width: popup_area.width,
            height: popup_area.height.saturating_sub(2),
        };
        scrollbar::render_vertical_scrollbar(
            frame,
            scrollbar_area,
            content_height,
            self.scroll.viewport_height as usize,
            self.scroll.offset as usize,
            theme::dashboard::SCROLLBAR,
        );
    }
}
