//! Keyboard sampling.
//!
//! Input model: instead of acting on each key event individually, we keep a
//! `key_frame` map that records the tick of the last press/repeat event for
//! every key.  Each tick we check which keys are still "fresh" (within
//! `HOLD_WINDOW` ticks) and treat them as held.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
//!   `Press` / `Repeat` / `Release` events → keys are removed on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire after `HOLD_WINDOW` ticks of silence.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::{Movement, TickInput};

/// A key is "held" if its last press/repeat arrived within this many ticks
/// (≈133 ms at 60 ticks per second, shorter than any OS repeat interval).
pub const HOLD_WINDOW: u64 = 8;

const UP_KEYS: [KeyCode; 3] = [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const DOWN_KEYS: [KeyCode; 3] = [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

#[derive(Clone, Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one terminal event seen during `frame`.  Returns `true` when the
    /// event asks to quit (Escape, or Ctrl+C as the window-close signal).
    pub fn handle(&mut self, event: &Event, frame: u64) -> bool {
        let Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        else {
            return false;
        };

        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(*code, frame);
                match code {
                    KeyCode::Esc => true,
                    KeyCode::Char('c') | KeyCode::Char('C') => {
                        modifiers.contains(KeyModifiers::CONTROL)
                    }
                    _ => false,
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(*code, frame);
                false
            }
            KeyEventKind::Release => {
                self.key_frame.remove(code);
                false
            }
        }
    }

    /// True if `key` was seen within the last `HOLD_WINDOW` ticks.
    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|key| self.is_held(key, frame))
    }

    pub fn movement(&self, frame: u64) -> Movement {
        Movement {
            up: self.any_held(&UP_KEYS, frame),
            down: self.any_held(&DOWN_KEYS, frame),
            left: self.any_held(&LEFT_KEYS, frame),
            right: self.any_held(&RIGHT_KEYS, frame),
        }
    }

    /// Feed a batch of events and sample the held keys for `frame`.
    pub fn sample<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>, frame: u64) -> TickInput {
        let mut quit = false;
        for event in events {
            quit |= self.handle(event, frame);
        }
        TickInput {
            movement: self.movement(frame),
            quit,
        }
    }
}

/// Drain every pending terminal event without blocking.
pub fn drain_events() -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}
