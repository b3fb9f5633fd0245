//! `Console`: the runtime that implements [`Platform`] on top of a [`Backend`].
//!
//! It owns all state the contract mutates: the canvas (framebuffer plus color
//! registers), the pending-action slot, the key map and the RNG. Everything is
//! single-threaded; callers that move rendering or input to another thread
//! must wrap the console in their own lock.

use crate::backend::{Backend, TextService};
use crate::config::Config;
use crate::contract::Platform;
use crate::core::{Canvas, FrameBuffer, SimpleRng};
use crate::input::{ActionSlot, EventBatch, KeyMap, Pump};
use crate::overlay;
use crate::types::{Fixed, KeyAction, Rgb};

pub struct Console<B, T> {
    canvas: Canvas,
    actions: ActionSlot,
    keymap: KeyMap,
    rng: SimpleRng,
    frame_ms: u64,
    backend: B,
    text: T,
}

impl<B: Backend, T: TextService> Console<B, T> {
    /// Allocate a framebuffer from `config` and start white-on-black.
    pub fn new(config: &Config, backend: B, text: T) -> Self {
        let fb = FrameBuffer::new(config.width, config.height, config.format);
        Self::with_framebuffer(fb, config, backend, text)
    }

    /// Use a framebuffer supplied by the host (for example one with a padded pitch).
    pub fn with_framebuffer(fb: FrameBuffer, config: &Config, backend: B, text: T) -> Self {
        log::info!(
            "console {}x{} pitch {} format {}",
            fb.width(),
            fb.height(),
            fb.pitch(),
            fb.format().as_str()
        );
        Self {
            canvas: Canvas::new(fb),
            actions: ActionSlot::new(),
            keymap: KeyMap::default(),
            rng: SimpleRng::new(config.seed),
            frame_ms: config.frame_ms,
            backend,
            text,
        }
    }

    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        self.canvas.framebuffer()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn text_service(&self) -> &T {
        &self.text
    }

    fn quit(&mut self) -> ! {
        log::info!("quit requested, shutting down");
        if let Err(e) = self.backend.shutdown() {
            log::warn!("backend shutdown failed: {:#}", e);
        }
        self.backend.exit()
    }

    /// Drain up to one batch of events from the backend. Returns `true` when
    /// the batch filled up and more events may be waiting.
    fn drain_batch(&mut self, batch: &mut EventBatch) -> bool {
        while !batch.is_full() {
            match self.backend.poll_event() {
                Ok(Some(event)) => batch.push(event),
                Ok(None) => return false,
                Err(e) => {
                    log::warn!("input poll failed: {:#}", e);
                    return false;
                }
            }
        }
        true
    }
}

impl<B: Backend, T: TextService> Platform for Console<B, T> {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn set_foreground(&mut self, color: u32) {
        self.canvas.set_foreground(color);
    }

    fn set_background(&mut self, color: u32) {
        self.canvas.set_background(color);
    }

    fn rgb_pack(&self, r: u8, g: u8, b: u8) -> u32 {
        self.canvas.rgb_pack(Rgb::new(r, g, b))
    }

    fn draw_pixel(&mut self, x: i32, y: i32) {
        self.canvas.draw_pixel(x, y);
    }

    fn hline(&mut self, x1: i32, x2: i32, y: i32) {
        self.canvas.hline(x1, x2, y);
    }

    fn vline(&mut self, x: i32, y1: i32, y2: i32) {
        self.canvas.vline(x, y1, y2);
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.canvas.draw_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.canvas.fill_rect(x, y, w, h);
    }

    fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) {
        self.canvas.fill_triangle(x1, y1, x2, y2, x3, y3);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, r: i32) {
        self.canvas.fill_circle(cx, cy, r);
    }

    fn update(&mut self) {
        if let Err(e) = self.backend.present(self.canvas.framebuffer()) {
            log::warn!("present failed, frame dropped: {:#}", e);
        }
    }

    fn yield_events(&mut self) {
        loop {
            let mut batch = EventBatch::new();
            let more = self.drain_batch(&mut batch);
            if self.actions.pump(batch, &self.keymap) == Pump::Quit {
                self.quit();
            }
            if !more {
                break;
            }
        }
    }

    fn poll_action(&mut self) -> KeyAction {
        self.actions.take()
    }

    fn time_ms(&self) -> u64 {
        self.backend.now_ms()
    }

    fn sleep(&mut self, ms: u64) {
        self.backend.sleep(ms);
    }

    fn srand(&mut self) {
        self.rng.reseed(self.backend.epoch_secs() as u32);
    }

    fn rand(&mut self) -> u32 {
        self.rng.next_rand()
    }

    fn game_over(&mut self) {
        for line in overlay::game_over_lines(self.canvas.height()) {
            if !overlay::draw_line(&mut self.canvas, &mut self.text, &line) {
                return;
            }
        }
        self.update();

        while self.poll_action() == KeyAction::None {
            self.yield_events();
            self.backend.sleep(self.frame_ms);
        }

        overlay::fade_out(&mut self.canvas, &mut self.backend, self.frame_ms);
    }

    fn draw_score(&mut self, score: Fixed) {
        let text = overlay::score_text(score);
        let line = overlay::score_line(&text, self.canvas.height());
        overlay::draw_line(&mut self.canvas, &mut self.text, &line);
    }
}


#[cfg(test)]
mod overlay_tests {
    use super::*;
    use crate::headless::{BoxText, Headless};
    use crate::input::{KeyCode, RawEvent};
    use crate::types::FADE_FRAMES;

    #[test]
    fn game_over_waits_for_key_then_fades() {
        let mut hl = Headless::new().with_recording();
        hl.schedule(200, RawEvent::KeyDown(KeyCode::Enter));
        let mut c = Console::new(&Config::default(), hl, BoxText::new());
        c.game_over();

        // One frame for the text, then the fade.
        assert_eq!(c.backend().presented(), 1 + FADE_FRAMES as usize);
        assert!(c.backend().now_ms() >= 200);
        assert!(c.framebuffer().bytes().iter().all(|&b| b == 0));
        assert_eq!(c.poll_action(), KeyAction::None);
    }

    #[test]
    fn game_over_draws_both_lines() {
        let mut hl = Headless::new().with_recording();
        hl.push_event(RawEvent::KeyDown(KeyCode::Char('x')));
        let mut c = Console::new(&Config::default(), hl, BoxText::new());
        c.game_over();

        assert_eq!(c.text_service().calls(), 2);
        let first = &c.backend().frames()[0];
        assert!(first.iter().any(|&b| b != 0));
    }

    #[test]
    fn game_over_without_fonts_returns_at_once() {
        let mut c = Console::new(&Config::default(), Headless::new(), BoxText::unavailable());
        c.game_over();
        assert_eq!(c.backend().presented(), 0);
        assert_eq!(c.backend().polls(), 0);
    }

    #[test]
    fn quit_event_shuts_down_before_exit() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut c = Console::new(&Config::default(), Headless::new(), BoxText::new());
        c.backend_mut().push_event(RawEvent::KeyDown(KeyCode::Esc));
        c.backend_mut().push_event(RawEvent::Quit);
        c.backend_mut().push_event(RawEvent::KeyDown(KeyCode::Char(' ')));

        let exited = catch_unwind(AssertUnwindSafe(|| c.yield_events()));
        assert!(exited.is_err());
        assert_eq!(c.backend().shutdowns(), 1);
        // Nothing after the quit event is translated.
        assert_eq!(c.poll_action(), KeyAction::Pause);
    }

    #[test]
    fn draw_score_blits_text() {
        let mut c = Console::new(&Config::default(), Headless::new(), BoxText::new());
        c.draw_score(42 << 16);
        // "42 m" in 20px boxes of width 10: 40 px wide, top at 120 - 4*20 = 40.
        let fb = c.framebuffer();
        assert_eq!(fb.pixel(140, 40), Some(0x00FF_FFFF));
        assert_eq!(fb.pixel(179, 59), Some(0x00FF_FFFF));
        assert_eq!(fb.pixel(139, 40), Some(0));
        assert_eq!(fb.pixel(140, 39), Some(0));
    }

    #[test]
    fn failed_present_is_not_fatal() {
        let mut c = Console::new(
            &Config::default(),
            Headless::new().with_failing_present(),
            BoxText::new(),
        );
        c.fill_rect(0, 0, 10, 10);
        c.update();
        assert_eq!(c.backend().presented(), 0);
    }
}
