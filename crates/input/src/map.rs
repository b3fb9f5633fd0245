//! Key mapping from terminal events to raw events and game actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::RawEvent;
use crate::types::KeyAction;

/// Which keys produce the two designated actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub jump: KeyCode,
    pub pause: KeyCode,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            jump: KeyCode::Char(' '),
            pause: KeyCode::Esc,
        }
    }
}

impl KeyMap {
    /// Map a pressed key to an action. Every key maps to something.
    pub fn translate(&self, code: KeyCode) -> KeyAction {
        if code == self.jump {
            KeyAction::Jump
        } else if code == self.pause {
            KeyAction::Pause
        } else {
            KeyAction::Other
        }
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Convert a terminal event into a [`RawEvent`].
///
/// Auto-repeat counts as a key press.
pub fn raw_event(event: &Event) -> RawEvent {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(*key) {
                    RawEvent::Quit
                } else {
                    RawEvent::KeyDown(key.code)
                }
            }
            KeyEventKind::Release => RawEvent::Ignored,
        },
        Event::Resize(w, h) => RawEvent::Resize(*w, *h),
        _ => RawEvent::Ignored,
    }
}
