//! Host-independent input events.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

/// Upper bound on events drained per pump step.
pub const EVENT_BATCH: usize = 32;

/// A fixed-capacity batch of drained events (no allocation per frame).
pub type EventBatch = ArrayVec<RawEvent, EVENT_BATCH>;

/// What the host reported, before translation into a [`crate::types::KeyAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// The user asked to close the program.
    Quit,
    /// A key went down (or auto-repeated).
    KeyDown(KeyCode),
    /// The host display changed size.
    Resize(u16, u16),
    /// Anything the translator does not care about.
    Ignored,
}
