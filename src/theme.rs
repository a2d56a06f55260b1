//! Centralized theme configuration for all UI components.
//!
//! Render files use `theme::module::CONSTANT` instead of hardcoding colors.
//! Palette: slate dashboard with muted borders.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(226, 232, 240);
    pub const TEXT_STRONG: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_MUTED: Color = Color::Rgb(160, 174, 192);

    pub const BG_DARK: Color = Color::Rgb(26, 32, 44);
    pub const BG_SURFACE: Color = Color::Rgb(45, 55, 72);
    pub const BORDER: Color = Color::Rgb(74, 85, 104);

    pub const ACCENT: Color = Color::Rgb(99, 179, 237);
    pub const WARNING: Color = Color::Rgb(246, 224, 94);
    pub const ERROR: Color = Color::Rgb(252, 129, 129);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Stats dashboard popup
pub mod dashboard {
    use super::*;

    pub const BORDER: Color = palette::BORDER;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT_STRONG)
        .add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const LABEL: Style = Style::new()
        .fg(palette::TEXT_STRONG)
        .add_modifier(Modifier::BOLD);
    pub const SECTION_TITLE: Style = Style::new()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD);
    pub const SECTION_RULE: Color = palette::BORDER;
    pub const COUNT: Style = Style::new()
        .fg(palette::TEXT_STRONG)
        .add_modifier(Modifier::BOLD);
    pub const PERCENT: Color = palette::TEXT_MUTED;
    pub const NOTE: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC);
    pub const WARNING: Color = palette::WARNING;
    pub const ERROR: Color = palette::ERROR;
    pub const FOOTER: Color = palette::TEXT_MUTED;
    pub const SCROLLBAR: Color = palette::BORDER;
}

/// Query prompt
pub mod prompt {
    use super::*;

    pub const BORDER: Color = palette::ACCENT;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TEXT: Color = palette::TEXT;
    pub const CURSOR: Style = palette::CURSOR;
}
