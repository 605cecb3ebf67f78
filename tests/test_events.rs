// ABOUTME: Unit tests for event handling to ensure keyboard inputs drive the tutorial correctly

use ajo_tutorial::app::{App, AppEvent, EventHandler};
use ajo_tutorial::components::tutorial::TutorialState;
use ajo_tutorial::config::{CompletionStore, MemoryCompletionStore, TUTORIAL_SEEN_KEY};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App<MemoryCompletionStore>, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(create_key_event(code), &app.state) {
        EventHandler::process_event(event, &mut app.state);
    }
}

#[test]
fn test_tutorial_key_mapping() {
    let app = App::with_builtin_tutorial(MemoryCompletionStore::new());

    for code in [KeyCode::Enter, KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('n')] {
        assert_eq!(
            EventHandler::handle_key_event(create_key_event(code), &app.state),
            Some(AppEvent::TutorialNext)
        );
    }

    for code in [KeyCode::Left, KeyCode::Backspace, KeyCode::Char('h'), KeyCode::Char('b')] {
        assert_eq!(
            EventHandler::handle_key_event(create_key_event(code), &app.state),
            Some(AppEvent::TutorialBack)
        );
    }

    for code in [KeyCode::Esc, KeyCode::Char('s')] {
        assert_eq!(
            EventHandler::handle_key_event(create_key_event(code), &app.state),
            Some(AppEvent::TutorialSkip)
        );
    }

    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('x')), &app.state),
        None
    );
}

#[test]
fn test_quit_key_events() {
    let app = App::with_builtin_tutorial(MemoryCompletionStore::new());

    let quit = EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &app.state);
    assert_eq!(quit, Some(AppEvent::Quit));

    let ctrl_c = EventHandler::handle_key_event(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &app.state,
    );
    assert_eq!(ctrl_c, Some(AppEvent::Quit));
}

#[test]
fn test_quit_does_not_mark_tutorial_seen() {
    let mut app = App::with_builtin_tutorial(MemoryCompletionStore::new());

    press(&mut app, KeyCode::Char('q'));

    assert!(app.state.should_quit);
    assert!(app.state.tutorial.is_visible());
    assert!(!app.state.tutorial.store().contains(TUTORIAL_SEEN_KEY).unwrap());
}

#[test]
fn test_esc_skips_then_quits() {
    let mut app = App::with_builtin_tutorial(MemoryCompletionStore::new());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state.tutorial.state(), TutorialState::Closed);
    assert!(!app.state.should_quit);

    press(&mut app, KeyCode::Esc);
    assert!(app.state.should_quit);
}

#[test]
fn test_navigation_keys_ignored_when_closed() {
    let app = App::with_builtin_tutorial(MemoryCompletionStore::seen());

    for code in [KeyCode::Enter, KeyCode::Left, KeyCode::Char('s')] {
        assert_eq!(
            EventHandler::handle_key_event(create_key_event(code), &app.state),
            None
        );
    }
}

#[test]
fn test_full_walkthrough_with_keys() {
    let mut app = App::with_builtin_tutorial(MemoryCompletionStore::new());

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.state.tutorial.state(), TutorialState::Open(1));

    for _ in 0..3 {
        press(&mut app, KeyCode::Enter);
    }

    assert_eq!(app.state.tutorial.state(), TutorialState::Closed);
    assert_eq!(app.state.tutorial.store().write_count(), 1);
}
