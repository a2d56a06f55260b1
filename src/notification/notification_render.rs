use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 1;

/// Render the active notification in the top-right corner
///
/// Call after the dashboard so it lands on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let (fg, bg) = notif.notification_type.colors();
    let frame_area = frame.area();

    // message + 1 space padding each side + borders
    let width = (notif.message.chars().count() as u16)
        .saturating_add(4)
        .min(frame_area.width.saturating_sub(MARGIN * 2));
    let area = Rect {
        x: frame_area.width.saturating_sub(width + MARGIN),
        y: MARGIN,
        width,
        height: 3u16.min(frame_area.height.saturating_sub(MARGIN * 2)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(bg).bg(bg))
        .style(Style::default().bg(bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(fg).bg(bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
