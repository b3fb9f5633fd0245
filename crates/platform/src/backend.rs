//! Host seams: where pixels go, where input and time come from, and who draws text.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use crate::core::{FrameBuffer, Surface};
use crate::input::RawEvent;
use crate::types::Rgb;

/// A display/input/clock host.
pub trait Backend {
    /// Show the framebuffer. Returns once the frame has been handed off.
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Next pending input event, without blocking.
    fn poll_event(&mut self) -> Result<Option<RawEvent>>;

    /// Monotonic milliseconds since the backend started.
    fn now_ms(&self) -> u64;

    /// Block for `ms` milliseconds.
    fn sleep(&mut self, ms: u64);

    /// Seconds since the Unix epoch, used to seed the RNG.
    fn epoch_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    /// Release host resources (restore the terminal, close windows).
    fn shutdown(&mut self) -> Result<()>;

    /// Terminate after a quit request. `shutdown` has already run.
    fn exit(&mut self) -> ! {
        std::process::exit(0)
    }
}

/// Renders strings into coverage surfaces.
pub trait TextService {
    /// Render `text` at roughly `point_size` pixels tall, or `None` if no font
    /// is available.
    fn render(&mut self, text: &str, point_size: u32, color: Rgb) -> Option<Surface>;
}
