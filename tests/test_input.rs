use arena_shooter::constants::HOLD_WINDOW_FRAMES;
use arena_shooter::entities::{HeldKeys, KeyPress};
use arena_shooter::input::KeyTracker;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(c: char) -> KeyEvent {
    KeyEvent::new_with_kind(KeyCode::Char(c), KeyModifiers::NONE, KeyEventKind::Press)
}

fn repeat(c: char) -> KeyEvent {
    KeyEvent::new_with_kind(KeyCode::Char(c), KeyModifiers::NONE, KeyEventKind::Repeat)
}

fn release(c: char) -> KeyEvent {
    KeyEvent::new_with_kind(KeyCode::Char(c), KeyModifiers::NONE, KeyEventKind::Release)
}

fn drain(t: &mut KeyTracker) -> Vec<KeyPress> {
    std::iter::from_fn(|| t.next_press()).collect()
}

// ── held keys ─────────────────────────────────────────────────────────────────

#[test]
fn pressed_key_is_held_within_window() {
    let mut t = KeyTracker::new(false);
    t.record(&press('w'), 10);
    assert!(t.held(10).up);
    assert!(t.held(10 + HOLD_WINDOW_FRAMES).up);
    assert!(!t.held(10 + HOLD_WINDOW_FRAMES + 1).up);
}

#[test]
fn release_reporting_terminal_holds_key_until_release() {
    let mut t = KeyTracker::new(true);
    t.record(&press('w'), 0);
    assert!(t.held(HOLD_WINDOW_FRAMES + 1).up);
    assert!(t.held(1000).up);

    t.record(&release('w'), 1001);
    assert!(!t.held(1001).up);
}

#[test]
fn repeat_keeps_key_held() {
    let mut t = KeyTracker::new(false);
    t.record(&press('d'), 1);
    t.record(&repeat('d'), 1 + HOLD_WINDOW_FRAMES);
    assert!(t.held(1 + 2 * HOLD_WINDOW_FRAMES).right);
}

#[test]
fn release_drops_key_immediately() {
    let mut t = KeyTracker::new(false);
    t.record(&press('a'), 1);
    t.record(&release('a'), 2);
    assert!(!t.held(2).left);
}

#[test]
fn movement_and_fire_combine() {
    let mut t = KeyTracker::new(false);
    for c in ['W', 's', 'a', 'D', ' '] {
        t.record(&press(c), 5);
    }
    assert_eq!(
        t.held(5),
        HeldKeys { up: true, down: true, left: true, right: true, fire: true }
    );
}

#[test]
fn unrelated_keys_are_ignored() {
    let mut t = KeyTracker::new(false);
    t.record(&press('x'), 1);
    t.record(
        &KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Press),
        1,
    );
    assert_eq!(t.held(1), HeldKeys::default());
    assert!(drain(&mut t).is_empty());
}

// ── discrete presses ──────────────────────────────────────────────────────────

#[test]
fn presses_are_queued_in_order_and_consumed_once() {
    let mut t = KeyTracker::new(false);
    t.record(&press(' '), 1);
    t.record(&press('r'), 1);
    t.record(&press('Q'), 1);
    assert_eq!(
        drain(&mut t),
        vec![KeyPress::Fire, KeyPress::Restart, KeyPress::Quit]
    );
    assert!(t.next_press().is_none());
}

#[test]
fn repeats_and_releases_do_not_queue_presses() {
    let mut t = KeyTracker::new(false);
    t.record(&repeat(' '), 1);
    t.record(&release('r'), 1);
    assert!(drain(&mut t).is_empty());
}

#[test]
fn escape_and_ctrl_c_quit() {
    let mut t = KeyTracker::new(false);
    t.record(
        &KeyEvent::new_with_kind(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Press),
        1,
    );
    t.record(
        &KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press),
        1,
    );
    t.record(&press('c'), 1);
    assert_eq!(drain(&mut t), vec![KeyPress::Quit, KeyPress::Quit]);
}
