//! Keyboard tracking on top of crossterm key events.
//!
//! The game needs two views of the keyboard: discrete presses (SPACE to
//! start, R to restart, quit) consumed once each, and the set of movement
//! and fire keys held down right now.
//!
//! Held state works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
//!   `Repeat` / `Release` events, so keys stay held until released.
//! * **Classic terminals**: only `Press` events, with OS key-repeat showing
//!   up as repeated presses.  Keys expire after `HOLD_WINDOW_FRAMES` frames
//!   of silence.

use std::collections::{HashMap, VecDeque};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::HOLD_WINDOW_FRAMES;
use crate::entities::{HeldKeys, KeyPress};

/// Keys the tracker cares about while playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

fn game_key(code: &KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameKey::Up),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameKey::Down),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameKey::Left),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameKey::Right),
        KeyCode::Char(' ') => Some(GameKey::Fire),
        _ => None,
    }
}

fn key_press(code: &KeyCode, modifiers: KeyModifiers) -> Option<KeyPress> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(KeyPress::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyPress::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyPress::Restart),
        KeyCode::Char(' ') => Some(KeyPress::Fire),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Each held key → the frame it was last seen (press or repeat).
    last_seen: HashMap<GameKey, u64>,
    presses: VecDeque<KeyPress>,
    /// The terminal sends `Release` events, so held keys never expire.
    reports_release: bool,
}

impl KeyTracker {
    /// `reports_release` is true when keyboard enhancement was granted.
    pub fn new(reports_release: bool) -> Self {
        KeyTracker {
            reports_release,
            ..Self::default()
        }
    }

    /// Feed one key event observed during `frame`.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) {
        let held = game_key(&event.code);
        match event.kind {
            KeyEventKind::Press => {
                if let Some(key) = held {
                    self.last_seen.insert(key, frame);
                }
                if let Some(press) = key_press(&event.code, event.modifiers) {
                    self.presses.push_back(press);
                }
            }
            KeyEventKind::Repeat => {
                if let Some(key) = held {
                    self.last_seen.insert(key, frame);
                }
            }
            KeyEventKind::Release => {
                if let Some(key) = held {
                    self.last_seen.remove(&key);
                }
            }
        }
    }

    /// Next queued discrete press, oldest first.
    pub fn next_press(&mut self) -> Option<KeyPress> {
        self.presses.pop_front()
    }

    /// Snapshot of the keys held as of `frame`.
    pub fn held(&self, frame: u64) -> HeldKeys {
        HeldKeys {
            up: self.is_held(GameKey::Up, frame),
            down: self.is_held(GameKey::Down, frame),
            left: self.is_held(GameKey::Left, frame),
            right: self.is_held(GameKey::Right, frame),
            fire: self.is_held(GameKey::Fire, frame),
        }
    }

    fn is_held(&self, key: GameKey, frame: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| {
                self.reports_release || frame.saturating_sub(last) <= HOLD_WINDOW_FRAMES
            })
            .unwrap_or(false)
    }
}
