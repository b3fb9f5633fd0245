//! Pitch-addressed pixel memory.
//!
//! Rows are `pitch` bytes apart, which may be more than `width * 4` when the
//! host pads its scanlines. All addressing in this crate goes through
//! [`FrameBuffer::offset`], so the padding is never touched by drawing code.

use anyhow::{bail, Result};

use crate::pixel::PixelFormat;
use crate::types::BYTES_PER_PIXEL;

/// A packed 32-bit pixel surface with an explicit row pitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pitch: usize,
    format: PixelFormat,
    bytes: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate a zeroed framebuffer with a tight pitch (`width * 4`).
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let pitch = width as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            pitch,
            format,
            bytes: vec![0; pitch * height as usize],
        }
    }

    /// Allocate a zeroed framebuffer with a padded pitch.
    pub fn with_pitch(width: u32, height: u32, pitch: usize, format: PixelFormat) -> Result<Self> {
        let len = checked_len(width, height, pitch)?;
        Self::from_bytes(width, height, pitch, format, vec![0; len])
    }

    /// Adopt memory handed over by the host.
    ///
    /// Fails if the geometry is empty, the pitch cannot hold a row, or the
    /// buffer is shorter than `height * pitch`.
    pub fn from_bytes(
        width: u32,
        height: u32,
        pitch: usize,
        format: PixelFormat,
        bytes: Vec<u8>,
    ) -> Result<Self> {
        let needed = checked_len(width, height, pitch)?;
        if bytes.len() < needed {
            bail!("framebuffer memory is {} bytes, need {}", bytes.len(), needed);
        }
        Ok(Self {
            width,
            height,
            pitch,
            format,
            bytes,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte offset of pixel `(x, y)`, or `None` when it lies off-screen.
    #[inline(always)]
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.pitch + x as usize * BYTES_PER_PIXEL)
    }

    #[inline(always)]
    fn read(&self, off: usize) -> u32 {
        let mut px = [0u8; BYTES_PER_PIXEL];
        px.copy_from_slice(&self.bytes[off..off + BYTES_PER_PIXEL]);
        u32::from_le_bytes(px)
    }

    #[inline(always)]
    fn write(&mut self, off: usize, color: u32) {
        self.bytes[off..off + BYTES_PER_PIXEL].copy_from_slice(&color.to_le_bytes());
    }

    /// Packed value at `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.offset(x, y).map(|off| self.read(off))
    }

    /// Write one pixel. Off-screen writes are dropped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(off) = self.offset(x, y) {
            self.write(off, color);
        }
    }

    /// Fill columns `[x1, x2)` of row `y`, clipped to the surface.
    pub fn fill_span(&mut self, x1: i32, x2: i32, y: i32, color: u32) {
        if y < 0 || y as u32 >= self.height {
            return;
        }
        let start = x1.max(0) as usize;
        let end = (x2.max(0) as u32).min(self.width) as usize;
        if start >= end {
            return;
        }
        let row = y as usize * self.pitch;
        let bytes = color.to_le_bytes();
        let span = &mut self.bytes[row + start * BYTES_PER_PIXEL..row + end * BYTES_PER_PIXEL];
        for px in span.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Fill rows `[y1, y2)` of column `x`, clipped to the surface.
    pub fn fill_column(&mut self, x: i32, y1: i32, y2: i32, color: u32) {
        if x < 0 || x as u32 >= self.width {
            return;
        }
        let start = y1.max(0);
        let end = (y2.max(0) as u32).min(self.height) as i32;
        let mut off = match self.offset(x, start) {
            Some(off) => off,
            None => return,
        };
        for _ in start..end {
            self.write(off, color);
            off += self.pitch;
        }
    }

    /// Fill every visible pixel. Row padding is left alone.
    pub fn fill(&mut self, color: u32) {
        for y in 0..self.height as i32 {
            self.fill_span(0, self.width as i32, y, color);
        }
    }

    /// Rewrite every visible pixel through `f`.
    pub fn map_pixels(&mut self, mut f: impl FnMut(u32) -> u32) {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        for row in self.bytes.chunks_exact_mut(self.pitch).take(self.height as usize) {
            for px in row[..row_bytes].chunks_exact_mut(BYTES_PER_PIXEL) {
                let mut raw = [0u8; BYTES_PER_PIXEL];
                raw.copy_from_slice(px);
                let next = f(u32::from_le_bytes(raw));
                px.copy_from_slice(&next.to_le_bytes());
            }
        }
    }
}

/// Bytes needed for `height` rows of `pitch`, after checking the geometry.
fn checked_len(width: u32, height: u32, pitch: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        bail!("framebuffer must not be empty ({}x{})", width, height);
    }
    let min_pitch = width as usize * BYTES_PER_PIXEL;
    if pitch < min_pitch {
        bail!("pitch {} is smaller than a {}-pixel row ({} bytes)", pitch, width, min_pitch);
    }
    match pitch.checked_mul(height as usize) {
        Some(len) => Ok(len),
        None => bail!("framebuffer of {} rows x {} bytes overflows", height, pitch),
    }
}
