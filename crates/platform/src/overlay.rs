//! Full-screen overlays: score, game over, fade to black.
//!
//! Text comes from a [`TextService`]. When it cannot produce a surface the
//! overlay logs a warning and skips that element; nothing here is fatal.

use crate::backend::{Backend, TextService};
use crate::core::Canvas;
use crate::math::to_int;
use crate::types::{large_font_size, small_font_size, Fixed, Rgb, FADE_FRAMES};

pub const GAME_OVER_TEXT: &str = "Game Over";
pub const CONTINUE_TEXT: &str = "Press any key to continue...";

/// One line of centred overlay text.
///
/// The line is centred horizontally; its top edge sits `rows_from_centre`
/// text-heights below the vertical centre (negative is above).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine<'a> {
    pub text: &'a str,
    pub point_size: u32,
    pub rows_from_centre: i32,
}

/// The two lines of the game-over screen for a screen of the given height.
pub fn game_over_lines(screen_height: u32) -> [TextLine<'static>; 2] {
    [
        TextLine {
            text: GAME_OVER_TEXT,
            point_size: large_font_size(screen_height),
            rows_from_centre: -3,
        },
        TextLine {
            text: CONTINUE_TEXT,
            point_size: small_font_size(screen_height),
            rows_from_centre: 1,
        },
    ]
}

/// Score text: the whole-number part of the fixed-point distance.
pub fn score_text(score: Fixed) -> String {
    format!("{} m", to_int(score))
}

/// Line used for the score, four text-heights above the centre.
pub fn score_line(text: &str, screen_height: u32) -> TextLine<'_> {
    TextLine {
        text,
        point_size: large_font_size(screen_height),
        rows_from_centre: -4,
    }
}

/// Render and blit one line. Returns `false` (after logging) if no text surface
/// could be produced.
pub fn draw_line<T: TextService>(canvas: &mut Canvas, fonts: &mut T, line: &TextLine<'_>) -> bool {
    let Some(surface) = fonts.render(line.text, line.point_size, Rgb::WHITE) else {
        log::warn!("font render failed for {:?}", line.text);
        return false;
    };
    let x = canvas.width() as i32 / 2 - surface.width() as i32 / 2;
    let y = canvas.height() as i32 / 2 + line.rows_from_centre * surface.height() as i32;
    canvas.blit(&surface, x, y);
    true
}

/// Darken the whole framebuffer over [`FADE_FRAMES`] presented frames.
pub fn fade_out<B: Backend>(canvas: &mut Canvas, backend: &mut B, frame_ms: u64) {
    for _ in 0..FADE_FRAMES {
        canvas.fade_step();
        if let Err(e) = backend.present(canvas.framebuffer()) {
            log::warn!("present failed during fade: {:#}", e);
        }
        backend.sleep(frame_ms);
    }
}
