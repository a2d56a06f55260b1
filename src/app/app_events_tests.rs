use super::*;
use crate::app::Phase;
use crate::test_utils::test_helpers::{test_app, wait_for_fetch};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_q_quits() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_esc_quits_when_prompt_closed() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_with_prompt_open() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('/')));
    app.handle_key_event(ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_scroll_keys() {
    let mut app = test_app("t:goblin");
    app.scroll.update_bounds(100, 20);

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.scroll.offset, 2);

    app.handle_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.scroll.offset, 1);

    app.handle_key_event(ctrl('d'));
    assert_eq!(app.scroll.offset, 11);

    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.scroll.offset, 80);

    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_slash_opens_prompt_with_current_query() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('/')));

    assert!(app.prompt.is_visible());
    assert_eq!(app.prompt.text(), "t:goblin");
}

#[test]
fn test_prompt_captures_q_instead_of_quitting() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('/')));
    type_text(&mut app, " q");

    assert!(!app.should_quit());
    assert_eq!(app.prompt.text(), "t:goblin q");
}

#[test]
fn test_prompt_esc_closes_without_searching() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('/')));
    app.handle_key_event(key(KeyCode::Esc));

    assert!(!app.prompt.is_visible());
    assert!(!app.should_quit());
    assert!(!app.is_fetching());
}

#[test]
fn test_prompt_enter_runs_new_search() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('/')));
    for _ in 0.."t:goblin".len() {
        app.handle_key_event(key(KeyCode::Backspace));
    }
    type_text(&mut app, "t:elf");
    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.prompt.is_visible());
    assert_eq!(app.target.query, "t:elf");
    wait_for_fetch(&mut app);
    assert!(matches!(app.phase, Phase::Ready(ref r) if r.query == "t:elf"));
}

#[test]
fn test_prompt_enter_with_blank_query_warns() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('/')));
    for _ in 0.."t:goblin".len() {
        app.handle_key_event(key(KeyCode::Backspace));
    }
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.prompt.is_visible());
    assert_eq!(
        app.notification.current_message(),
        Some("No Scryfall search query found.")
    );
    assert_eq!(app.target.query, "t:goblin");
}

#[test]
fn test_r_reruns_current_search() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('r')));
    wait_for_fetch(&mut app);

    assert!(matches!(app.phase, Phase::Ready(ref r) if r.total_cards == 6));
}

#[test]
fn test_y_before_ready_does_nothing() {
    let mut app = test_app("t:goblin");
    app.handle_key_event(key(KeyCode::Char('y')));
    assert_eq!(app.notification.current_message(), None);
}
