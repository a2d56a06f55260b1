//! Dashboard content for each phase, built as styled lines

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::app_state::Phase;
use crate::report::{format_percent, total_line};
use crate::stats::{StatSection, StatsReport};
use crate::theme;

pub fn dashboard_lines(phase: &Phase) -> Vec<Line<'static>> {
    match phase {
        Phase::Fetching { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme::dashboard::TEXT),
        ))],
        Phase::Failed(message) => vec![Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(theme::dashboard::ERROR),
        ))],
        Phase::Ready(report) => report_lines(report),
    }
}

fn report_lines(report: &StatsReport) -> Vec<Line<'static>> {
    let text = Style::default().fg(theme::dashboard::TEXT);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Query: ", theme::dashboard::LABEL),
            Span::styled(report.query.clone(), text),
        ]),
        Line::from(Span::styled(total_line(report), theme::dashboard::LABEL)),
    ];

    if let Some(note) = report.limit_note() {
        lines.push(Line::from(Span::styled(note, theme::dashboard::NOTE)));
    }
    for warning in &report.warnings {
        lines.push(Line::from(Span::styled(
            format!("Warning: {}", warning),
            Style::default().fg(theme::dashboard::WARNING),
        )));
    }

    if report.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("No cards found.", text)));
        return lines;
    }

    for section in &report.sections {
        lines.push(Line::default());
        push_section(&mut lines, section);
    }
    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, section: &StatSection) {
    lines.push(Line::from(Span::styled(
        section.title.clone(),
        theme::dashboard::SECTION_TITLE,
    )));

    let rule = Style::default().fg(theme::dashboard::SECTION_RULE);
    for entry in &section.entries {
        lines.push(Line::from(vec![
            Span::styled("│ ", rule),
            Span::styled(
                format!("{}: ", entry.label),
                Style::default().fg(theme::dashboard::TEXT),
            ),
            Span::styled(entry.count.to_string(), theme::dashboard::COUNT),
            Span::styled(
                format!(" ({}%)", format_percent(entry.percent)),
                Style::default().fg(theme::dashboard::PERCENT),
            ),
        ]));
    }
}
