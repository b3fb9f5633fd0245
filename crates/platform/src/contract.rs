//! The platform contract: every entry point the game logic is allowed to call.

use crate::math;
use crate::types::{Fixed, KeyAction, MenuAction};

/// Drawing, math, input, time and overlay services for the game logic.
///
/// Colors are packed values for the active pixel format (see
/// [`Platform::rgb_pack`]). Drawing calls take effect in memory immediately and
/// become visible on the next [`Platform::update`].
pub trait Platform {
    /// Framebuffer width in pixels.
    fn width(&self) -> u32;
    /// Framebuffer height in pixels.
    fn height(&self) -> u32;

    fn clear(&mut self);
    fn set_foreground(&mut self, color: u32);
    fn set_background(&mut self, color: u32);
    fn rgb_pack(&self, r: u8, g: u8, b: u8) -> u32;

    fn draw_pixel(&mut self, x: i32, y: i32);
    fn hline(&mut self, x1: i32, x2: i32, y: i32);
    fn vline(&mut self, x: i32, y1: i32, y2: i32);
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32);
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32);
    fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32);
    fn fill_circle(&mut self, cx: i32, cy: i32, r: i32);

    /// Present the framebuffer.
    fn update(&mut self);

    fn sin(&self, angle: Fixed) -> Fixed {
        math::sin(angle)
    }

    fn cos(&self, angle: Fixed) -> Fixed {
        math::cos(angle)
    }

    fn sqrt(&self, n: Fixed) -> Fixed {
        math::sqrt(n)
    }

    fn cos_table(&self, phase: u8) -> Fixed {
        math::cos_table(phase)
    }

    /// Drain pending host events into the action slot. A quit event ends the process.
    fn yield_events(&mut self);

    /// Return the pending action and clear it.
    fn poll_action(&mut self) -> KeyAction;

    /// Monotonic milliseconds.
    fn time_ms(&self) -> u64;
    fn sleep(&mut self, ms: u64);

    /// Reseed the RNG from the wall clock.
    fn srand(&mut self);
    fn rand(&mut self) -> u32;

    fn do_menu(&mut self) -> MenuAction {
        MenuAction::Play
    }

    /// Show the game-over screen, wait for any key, then fade to black.
    fn game_over(&mut self);

    /// Hook called while the game is paused.
    fn paused(&mut self) {}

    /// Draw the distance travelled (whole part of `score`) as centred text.
    fn draw_score(&mut self, score: Fixed);

    fn log(&self, message: &str) {
        log::info!("{}", message);
    }
}
