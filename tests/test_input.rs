use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sprite_collision::entities::Movement;
use sprite_collision::input::{KeyTracker, HOLD_WINDOW};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}

#[test]
fn arrow_and_letter_keys_map_to_same_direction() {
    let pairs = [
        (KeyCode::Up, KeyCode::Char('w')),
        (KeyCode::Down, KeyCode::Char('s')),
        (KeyCode::Left, KeyCode::Char('a')),
        (KeyCode::Right, KeyCode::Char('d')),
    ];
    for (arrow, letter) in pairs {
        let mut by_arrow = KeyTracker::new();
        let mut by_letter = KeyTracker::new();
        let a = by_arrow.sample(&[press(arrow)], 1);
        let b = by_letter.sample(&[press(letter)], 1);
        assert_eq!(a.movement, b.movement);
        assert_ne!(a.movement, Movement::default());
    }
}

#[test]
fn uppercase_letters_count() {
    let mut keys = KeyTracker::new();
    let input = keys.sample(&[press(KeyCode::Char('D'))], 1);
    assert!(input.movement.right);
}

#[test]
fn simultaneous_keys_are_all_held() {
    let mut keys = KeyTracker::new();
    let input = keys.sample(&[press(KeyCode::Right), press(KeyCode::Char('w'))], 3);
    assert_eq!(
        input.movement,
        Movement {
            up: true,
            down: false,
            left: false,
            right: true
        }
    );
    assert!(!input.quit);
}

#[test]
fn key_expires_after_hold_window() {
    let mut keys = KeyTracker::new();
    keys.sample(&[press(KeyCode::Left)], 10);
    assert!(keys.movement(10 + HOLD_WINDOW).left);
    assert!(!keys.movement(11 + HOLD_WINDOW).left);
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new();
    keys.sample(&[press(KeyCode::Left)], 10);
    let repeat = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Left,
        KeyModifiers::NONE,
        KeyEventKind::Repeat,
    ));
    keys.sample(&[repeat], 15);
    assert!(keys.movement(15 + HOLD_WINDOW).left);
}

#[test]
fn release_clears_immediately() {
    let mut keys = KeyTracker::new();
    keys.sample(&[press(KeyCode::Up)], 1);
    let input = keys.sample(&[release(KeyCode::Up)], 2);
    assert!(!input.movement.up);
}

#[test]
fn escape_quits() {
    let mut keys = KeyTracker::new();
    assert!(keys.sample(&[press(KeyCode::Esc)], 1).quit);
}

#[test]
fn ctrl_c_quits_but_plain_c_does_not() {
    let mut keys = KeyTracker::new();
    assert!(!keys.sample(&[press(KeyCode::Char('c'))], 1).quit);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(keys.sample(&[ctrl_c], 2).quit);
}

#[test]
fn non_key_events_are_ignored() {
    let mut keys = KeyTracker::new();
    let input = keys.sample(&[Event::Resize(80, 24), Event::FocusLost], 1);
    assert_eq!(input.movement, Movement::default());
    assert!(!input.quit);
}
