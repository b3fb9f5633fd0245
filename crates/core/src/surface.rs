//! Single-color coverage surfaces produced by text rendering.

use crate::types::Rgb;

/// A `width`×`height` grid of coverage values (0 = transparent, 255 = opaque)
/// painted in one color. Blitted with [`crate::Canvas::blit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    color: Rgb,
    coverage: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            color,
            coverage: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Coverage at `(x, y)`; 0 outside the surface.
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        self.idx(x, y).map(|i| self.coverage[i]).unwrap_or(0)
    }

    pub fn set_coverage(&mut self, x: u32, y: u32, value: u8) {
        if let Some(i) = self.idx(x, y) {
            self.coverage[i] = value;
        }
    }

    /// Number of pixels with non-zero coverage.
    pub fn covered(&self) -> usize {
        self.coverage.iter().filter(|&&c| c != 0).count()
    }
}
