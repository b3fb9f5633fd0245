//! In-memory backend and text service, for tests and benches.
//!
//! Time is virtual: [`Headless::sleep`] advances the clock instead of blocking,
//! and scheduled events become visible once the clock reaches them.

use std::collections::VecDeque;

use anyhow::{bail, Result};

use crate::backend::{Backend, TextService};
use crate::core::{FrameBuffer, Surface};
use crate::input::RawEvent;
use crate::types::Rgb;

#[derive(Debug, Default)]
pub struct Headless {
    clock_ms: u64,
    epoch_secs: u64,
    events: VecDeque<(u64, RawEvent)>,
    presented: usize,
    record: bool,
    frames: Vec<Vec<u8>>,
    fail_present: bool,
    shutdowns: usize,
    polls: usize,
}

impl Headless {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a copy of every presented frame's bytes.
    pub fn with_recording(mut self) -> Self {
        self.record = true;
        self
    }

    /// Make every `present` call fail.
    pub fn with_failing_present(mut self) -> Self {
        self.fail_present = true;
        self
    }

    /// Wall-clock value reported to `srand`.
    pub fn with_epoch_secs(mut self, secs: u64) -> Self {
        self.epoch_secs = secs;
        self
    }

    /// Queue an event that is available immediately.
    pub fn push_event(&mut self, event: RawEvent) {
        self.schedule(self.clock_ms, event);
    }

    /// Queue an event that becomes available at `at_ms` on the virtual clock.
    pub fn schedule(&mut self, at_ms: u64, event: RawEvent) {
        let pos = self
            .events
            .iter()
            .position(|(t, _)| *t > at_ms)
            .unwrap_or(self.events.len());
        self.events.insert(pos, (at_ms, event));
    }

    pub fn presented(&self) -> usize {
        self.presented
    }

    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    pub fn shutdowns(&self) -> usize {
        self.shutdowns
    }

    /// Number of `poll_event` calls so far.
    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl Backend for Headless {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        if self.fail_present {
            bail!("headless display unavailable");
        }
        self.presented += 1;
        if self.record {
            self.frames.push(fb.bytes().to_vec());
        }
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<RawEvent>> {
        self.polls += 1;
        let ready = matches!(self.events.front(), Some((at, _)) if *at <= self.clock_ms);
        if !ready {
            return Ok(None);
        }
        Ok(self.events.pop_front().map(|(_, e)| e))
    }

    fn now_ms(&self) -> u64 {
        self.clock_ms
    }

    fn sleep(&mut self, ms: u64) {
        self.clock_ms += ms;
    }

    fn epoch_secs(&self) -> u64 {
        self.epoch_secs
    }

    fn shutdown(&mut self) -> Result<()> {
        self.shutdowns += 1;
        Ok(())
    }

    fn exit(&mut self) -> ! {
        panic!("quit requested");
    }
}

/// Text service drawing every character as a solid `point_size/2`×`point_size` box.
#[derive(Debug, Clone)]
pub struct BoxText {
    available: bool,
    calls: usize,
}

impl BoxText {
    pub fn new() -> Self {
        Self {
            available: true,
            calls: 0,
        }
    }

    /// A text service with no font loaded.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Default for BoxText {
    fn default() -> Self {
        Self::new()
    }
}

impl TextService for BoxText {
    fn render(&mut self, text: &str, point_size: u32, color: Rgb) -> Option<Surface> {
        self.calls += 1;
        if !self.available {
            return None;
        }
        let glyph_w = (point_size / 2).max(1);
        let h = point_size.max(1);
        let w = glyph_w * text.chars().count() as u32;
        let mut surface = Surface::new(w, h, color);
        for y in 0..h {
            for x in 0..w {
                surface.set_coverage(x, y, 255);
            }
        }
        Some(surface)
    }
}
