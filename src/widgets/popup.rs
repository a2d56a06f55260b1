use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rectangle of at most `width` × `height` centered in `frame_area`
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + (frame_area.width - width) / 2,
        y: frame_area.y + (frame_area.height - height) / 2,
        width,
        height,
    }
}

/// Full-width strip of `height` rows glued to the bottom of `frame_area`
pub fn bottom_strip(frame_area: Rect, height: u16) -> Rect {
    let height = height.min(frame_area.height);
    Rect {
        x: frame_area.x,
        y: frame_area.y + frame_area.height - height,
        width: frame_area.width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
