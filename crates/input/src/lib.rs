//! Input action translator.
//!
//! Turns host input into the small action vocabulary the game understands
//! (`jump`, `pause`, `other`, `none`). It keeps exactly one pending action and
//! never queues: see [`ActionSlot`].
//!
//! The host side is described by [`RawEvent`]; [`map::raw_event`] converts
//! `crossterm` events into it, so the translator itself can be driven from tests
//! or any other backend.

pub mod event;
pub mod map;
pub mod slot;

pub use paint_run_types as types;

pub use crossterm::event::KeyCode;

pub use event::{EventBatch, RawEvent, EVENT_BATCH};
pub use map::{raw_event, should_quit, KeyMap};
pub use slot::{ActionSlot, Pump};
