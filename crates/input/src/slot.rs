//! Single-slot pending action register.
//!
//! Only the most recent key matters each frame: every recognised key press
//! overwrites the slot, and polling empties it. Keys pressed between two polls
//! are dropped except the last one.

use crate::event::RawEvent;
use crate::map::KeyMap;
use crate::types::KeyAction;

/// Outcome of draining a batch of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pump {
    Continue,
    /// A quit event was seen; later events in the batch were not looked at.
    Quit,
}

/// Latest-wins action register.
#[derive(Debug, Clone, Default)]
pub struct ActionSlot {
    pending: KeyAction,
}

impl ActionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pending action, without consuming it.
    pub fn peek(&self) -> KeyAction {
        self.pending
    }

    /// Overwrite the pending action.
    pub fn set(&mut self, action: KeyAction) {
        self.pending = action;
    }

    /// Return the pending action and reset the slot to [`KeyAction::None`].
    pub fn take(&mut self) -> KeyAction {
        std::mem::take(&mut self.pending)
    }

    /// Apply one raw event.
    pub fn apply(&mut self, event: RawEvent, keymap: &KeyMap) -> Pump {
        match event {
            RawEvent::Quit => return Pump::Quit,
            RawEvent::KeyDown(code) => self.set(keymap.translate(code)),
            RawEvent::Resize(..) | RawEvent::Ignored => {}
        }
        Pump::Continue
    }

    /// Apply every event in order, stopping at the first quit.
    pub fn pump<I>(&mut self, events: I, keymap: &KeyMap) -> Pump
    where
        I: IntoIterator<Item = RawEvent>,
    {
        for event in events {
            if self.apply(event, keymap) == Pump::Quit {
                return Pump::Quit;
            }
        }
        Pump::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn key(c: char) -> RawEvent {
        RawEvent::KeyDown(KeyCode::Char(c))
    }

    #[test]
    fn test_initially_none() {
        let mut slot = ActionSlot::new();
        assert_eq!(slot.take(), KeyAction::None);
    }

    #[test]
    fn test_take_consumes() {
        let mut slot = ActionSlot::new();
        let map = KeyMap::default();
        slot.pump([key(' ')], &map);
        assert_eq!(slot.take(), KeyAction::Jump);
        assert_eq!(slot.take(), KeyAction::None);
    }

    #[test]
    fn test_latest_wins() {
        let mut slot = ActionSlot::new();
        let map = KeyMap::default();
        slot.pump([key(' '), RawEvent::KeyDown(KeyCode::Esc)], &map);
        assert_eq!(slot.take(), KeyAction::Pause);
    }

    #[test]
    fn test_ignored_events_keep_pending() {
        let mut slot = ActionSlot::new();
        let map = KeyMap::default();
        slot.pump([key('x'), RawEvent::Ignored, RawEvent::Resize(10, 10)], &map);
        assert_eq!(slot.peek(), KeyAction::Other);
    }

    #[test]
    fn test_quit_stops_pump() {
        let mut slot = ActionSlot::new();
        let map = KeyMap::default();
        let out = slot.pump([key('x'), RawEvent::Quit, key(' ')], &map);
        assert_eq!(out, Pump::Quit);
        assert_eq!(slot.peek(), KeyAction::Other);
    }
}
