//! Terminal host for the platform layer.
//!
//! The pixel framebuffer is shown with half-block characters (two pixels per
//! cell, stacked vertically), downscaled to fit the terminal. Keyboard input
//! comes from crossterm and text from the built-in `embedded-graphics` fonts.

pub mod backend;
pub mod cells;
pub mod renderer;
pub mod text;
pub mod view;

pub use paint_run_core as core;
pub use paint_run_input as input;
pub use paint_run_platform as platform;
pub use paint_run_types as types;

pub use backend::TermBackend;
pub use cells::{Cell, CellBuffer, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::{font_for, MonoText};
pub use view::{PixelView, Viewport};
