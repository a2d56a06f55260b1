use super::*;
use crate::stats::StatSection;
use insta::assert_snapshot;

fn entry(label: &str, count: usize, percent: f64) -> StatEntry {
    StatEntry {
        label: label.to_string(),
        count,
        percent,
    }
}

fn sample_report() -> StatsReport {
    StatsReport {
        query: "t:goblin".to_string(),
        total_cards: 3,
        total_available: Some(3),
        was_limited: false,
        max_pages: 10,
        warnings: Vec::new(),
        sections: vec![
            StatSection {
                title: "Top 5 Color Identities".to_string(),
                entries: vec![entry("R", 2, 200.0 / 3.0), entry("BR", 1, 100.0 / 3.0)],
            },
            StatSection {
                title: "Mana Curve".to_string(),
                entries: vec![entry("CMC 1", 2, 200.0 / 3.0), entry("CMC 3", 1, 100.0 / 3.0)],
            },
        ],
    }
}

#[test]
fn test_format_entry_rounds_to_one_decimal() {
    assert_eq!(format_entry(&entry("R", 2, 200.0 / 3.0)), "R: 2 (66.7%)");
    assert_eq!(format_entry(&entry("CMC 0", 1, 100.0)), "CMC 0: 1 (100.0%)");
}

#[test]
fn test_format_entry_rounds_halves_up() {
    assert_eq!(format_entry(&entry("R", 1, 1.0 / 16.0 * 100.0)), "R: 1 (6.3%)");
    assert_eq!(format_percent(1.0 / 400.0 * 100.0), "0.3");
    assert_eq!(format_percent(5.0 / 400.0 * 100.0), "1.3");
    assert_eq!(format_percent(0.0), "0.0");
}

#[test]
fn test_plain_report_snapshot() {
    let output = render_plain(&sample_report());
    assert_snapshot!("plain_report", output);
}

#[test]
fn test_total_line_mentions_matching_count_when_capped() {
    let mut report = sample_report();
    report.total_available = Some(5000);
    assert_eq!(total_line(&report), "Total Cards Found: 3 (of 5000 matching)");
}

#[test]
fn test_plain_report_includes_limit_note_and_warnings() {
    let mut report = sample_report();
    report.was_limited = true;
    report.warnings = vec!["Invalid expression \"zz:1\" was ignored.".to_string()];

    let output = render_plain(&report);

    assert!(output.contains("Note: Results capped at 10 pages."));
    assert!(output.contains("Warning: Invalid expression \"zz:1\" was ignored."));
}

#[test]
fn test_plain_report_for_no_cards() {
    let report = StatsReport {
        total_cards: 0,
        total_available: None,
        sections: Vec::new(),
        ..sample_report()
    };

    let output = render_plain(&report);

    assert!(output.contains("Total Cards Found: 0"));
    assert!(output.ends_with("No cards found."));
}

#[test]
fn test_json_report_shape() {
    let json = render_json(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["query"], "t:goblin");
    assert_eq!(value["total_cards"], 3);
    assert_eq!(value["was_limited"], false);
    assert_eq!(value["sections"][0]["title"], "Top 5 Color Identities");
    assert_eq!(value["sections"][0]["entries"][0]["label"], "R");
    assert_eq!(value["sections"][0]["entries"][0]["count"], 2);
    assert!(value.get("warnings").is_none());
}
