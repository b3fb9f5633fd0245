//! Crossterm-backed host: half-block display, keyboard input and a wall clock.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use crate::cells::CellBuffer;
use crate::core::FrameBuffer;
use crate::input::{raw_event, RawEvent};
use crate::platform::Backend;
use crate::renderer::TerminalRenderer;
use crate::view::{PixelView, Viewport};

pub struct TermBackend {
    renderer: TerminalRenderer,
    view: PixelView,
    cells: CellBuffer,
    viewport: Viewport,
    started: Instant,
}

impl TermBackend {
    /// Enter the alternate screen and size the viewport to the terminal.
    pub fn new() -> Result<Self> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            view: PixelView::new(),
            cells: CellBuffer::new(w, h),
            viewport: Viewport::new(w, h),
            started: Instant::now(),
        })
    }
}

impl Backend for TermBackend {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.view.render_into(fb, self.viewport, &mut self.cells);
        self.renderer.draw_swap(&mut self.cells)
    }

    fn poll_event(&mut self) -> Result<Option<RawEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let raw = raw_event(&event::read()?);
        if let RawEvent::Resize(w, h) = raw {
            log::debug!("terminal resized to {}x{}", w, h);
            self.viewport = Viewport::new(w, h);
            self.renderer.invalidate();
        }
        Ok(Some(raw))
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }

    fn shutdown(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}
