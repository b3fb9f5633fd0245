//! Core types module - shared data structures and constants
//!
//! This module defines the plain types that cross the platform contract between
//! the game logic and the hardware-facing layer. Nothing here performs I/O or
//! floating point math.
//!
//! # Fixed-Point Numbers
//!
//! Game-space coordinates, angles (in degrees) and scores are 16.16 fixed-point
//! values stored in an `i32`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRACBITS` | 16 | Number of fractional bits |
//! | `FIXED_ONE` | 65536 | The value 1.0 |
//!
//! # Screen Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 320 | Framebuffer width in pixels |
//! | `DEFAULT_HEIGHT` | 240 | Framebuffer height in pixels |
//! | `BYTES_PER_PIXEL` | 4 | Every supported pixel format is 32-bit |
//! | `FADE_FRAMES` | 100 | Frames in the fade-to-black transition |
//! | `DEFAULT_FRAME_MS` | 16 | Sleep between polls in blocking overlays |
//!
//! # Examples
//!
//! ```
//! use paint_run_types::{KeyAction, Rgb, FIXED_ONE, FRACBITS};
//!
//! assert_eq!(FIXED_ONE, 1 << FRACBITS);
//! assert_eq!(KeyAction::default(), KeyAction::None);
//! assert!(KeyAction::Jump.is_some());
//!
//! let white = Rgb::WHITE;
//! assert_eq!((white.r, white.g, white.b), (255, 255, 255));
//! ```

/// 16.16 fixed-point number.
pub type Fixed = i32;

/// Number of fractional bits in a [`Fixed`].
pub const FRACBITS: u32 = 16;

/// Fixed-point 1.0
pub const FIXED_ONE: Fixed = 1 << FRACBITS;

/// Default framebuffer width in pixels
pub const DEFAULT_WIDTH: u32 = 320;

/// Default framebuffer height in pixels
pub const DEFAULT_HEIGHT: u32 = 240;

/// Size of one packed pixel in bytes
pub const BYTES_PER_PIXEL: usize = 4;

/// Number of frames the fade-to-black transition runs for
pub const FADE_FRAMES: u32 = 100;

/// Fade factor numerator (19/20 = 0.95 per frame)
pub const FADE_NUMERATOR: u32 = 19;

/// Fade factor denominator
pub const FADE_DENOMINATOR: u32 = 20;

/// Delay between input polls while an overlay blocks (16ms ≈ 60 FPS)
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Seed used for the random number generator at startup
pub const DEFAULT_SEED: u32 = 7;

/// Point size of the large overlay font ("Game Over", score).
pub fn large_font_size(screen_height: u32) -> u32 {
    screen_height / 12
}

/// Point size of the small overlay font (prompts).
pub fn small_font_size(screen_height: u32) -> u32 {
    screen_height / 24
}

/// Discrete actions produced by the input translator.
///
/// Exactly one action can be pending at a time; see `paint_run_input::ActionSlot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyAction {
    /// Nothing pending
    #[default]
    None,
    /// Primary action key
    Jump,
    /// Secondary action key
    Pause,
    /// Any other key
    Other,
}

impl KeyAction {
    /// True for every action except [`KeyAction::None`].
    pub fn is_some(&self) -> bool {
        !matches!(self, KeyAction::None)
    }

    /// Lowercase name, for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::None => "none",
            KeyAction::Jump => "jump",
            KeyAction::Pause => "pause",
            KeyAction::Other => "other",
        }
    }
}

/// Result of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a new game
    Play,
    /// Leave the program
    Quit,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
