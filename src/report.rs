//! Non-interactive output
//!
//! Plain text mirrors the dashboard popup line for line and is also what
//! gets copied to the clipboard; JSON is for scripting.

use crate::stats::{StatEntry, StatsReport};

pub const REPORT_TITLE: &str = "Scryfall Search Stats";

pub fn format_entry(entry: &StatEntry) -> String {
    format!("{}: {} ({}%)", entry.label, entry.count, format_percent(entry.percent))
}

/// One decimal place, halves rounded up (`6.25` → `6.3`)
pub fn format_percent(percent: f64) -> String {
    let tenths = (percent.max(0.0) * 10.0 + 0.5).floor() as u64;
    format!("{}.{}", tenths / 10, tenths % 10)
}

pub fn total_line(report: &StatsReport) -> String {
    match report.total_available {
        Some(available) if available as usize > report.total_cards => format!(
            "Total Cards Found: {} (of {} matching)",
            report.total_cards, available
        ),
        _ => format!("Total Cards Found: {}", report.total_cards),
    }
}

pub fn render_plain(report: &StatsReport) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        format!("Query: {}", report.query),
        total_line(report),
    ];
    if let Some(note) = report.limit_note() {
        lines.push(note);
    }
    for warning in &report.warnings {
        lines.push(format!("Warning: {}", warning));
    }

    if report.is_empty() {
        lines.push(String::new());
        lines.push("No cards found.".to_string());
    }

    for section in &report.sections {
        lines.push(String::new());
        lines.push(section.title.clone());
        for entry in &section.entries {
            lines.push(format!("  {}", format_entry(entry)));
        }
    }

    lines.join("\n")
}

pub fn render_json(report: &StatsReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
#[path = "report/report_tests.rs"]
mod report_tests;
