//! PixelView: scales a pixel framebuffer into a half-block cell grid.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::cells::{Cell, CellBuffer};
use crate::core::FrameBuffer;
use crate::types::Rgb;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel rows the viewport can show (two per terminal row).
    pub fn pixel_rows(&self) -> u32 {
        self.height as u32 * 2
    }
}

/// Nearest-neighbour downscaler that keeps the aspect ratio and centres the image.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelView {
    border: Rgb,
}

impl PixelView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color used for the letterbox around the image.
    pub fn with_border(mut self, border: Rgb) -> Self {
        self.border = border;
        self
    }

    /// Size in cells of the scaled image for `viewport`. Never upscales.
    pub fn image_size(&self, fb: &FrameBuffer, viewport: Viewport) -> (u16, u16) {
        let (fw, fh) = (fb.width() as u64, fb.height() as u64);
        let (vw, vh) = (viewport.width as u64, viewport.pixel_rows() as u64);
        if fw == 0 || fh == 0 || vw == 0 || vh == 0 {
            return (0, 0);
        }
        // Scale factor num/den = min(vw/fw, vh/fh, 1).
        let (num, den) = if vw * fh <= vh * fw { (vw, fw) } else { (vh, fh) };
        let (num, den) = if num >= den { (1, 1) } else { (num, den) };
        let w = (fw * num / den).max(1);
        let h = (fh * num / den).max(1);
        (w as u16, h.div_ceil(2) as u16)
    }

    /// Render `fb` into `out`, resizing `out` to the viewport first.
    ///
    /// Reuses `out`'s allocation; steady-state frames do not allocate.
    pub fn render_into(&self, fb: &FrameBuffer, viewport: Viewport, out: &mut CellBuffer) {
        out.resize(viewport.width, viewport.height);
        out.clear(Cell::new(self.border, self.border));

        let (cw, ch) = self.image_size(fb, viewport);
        if cw == 0 || ch == 0 {
            return;
        }
        let ph = ch as u32 * 2;
        let x0 = (viewport.width - cw) / 2;
        let y0 = (viewport.height - ch) / 2;
        let format = fb.format();

        let sample = |px: u32, py: u32| -> Rgb {
            let sx = (px as u64 * fb.width() as u64 / cw as u64) as i32;
            let sy = (py as u64 * fb.height() as u64 / ph as u64) as i32;
            fb.pixel(sx, sy).map(|p| format.unpack(p)).unwrap_or(self.border)
        };

        for cy in 0..ch {
            for cx in 0..cw {
                let top = sample(cx as u32, cy as u32 * 2);
                let bottom = sample(cx as u32, cy as u32 * 2 + 1);
                out.set(x0 + cx, y0 + cy, Cell::new(top, bottom));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Canvas, PixelFormat};

    #[test]
    fn image_size_keeps_aspect() {
        let fb = FrameBuffer::new(320, 240, PixelFormat::Xrgb8888);
        let view = PixelView::new();
        // 160 columns x 120 pixel rows: exactly half size.
        assert_eq!(view.image_size(&fb, Viewport::new(160, 60)), (160, 60));
        // Width-limited.
        assert_eq!(view.image_size(&fb, Viewport::new(80, 60)), (80, 30));
        // Never upscales.
        assert_eq!(view.image_size(&fb, Viewport::new(1000, 1000)), (320, 120));
        assert_eq!(view.image_size(&fb, Viewport::new(0, 10)), (0, 0));
    }

    #[test]
    fn renders_top_and_bottom_halves() {
        let mut canvas = Canvas::new(FrameBuffer::new(2, 2, PixelFormat::Xbgr8888));
        let red = canvas.rgb_pack(Rgb::new(255, 0, 0));
        canvas.set_foreground(red);
        canvas.hline(0, 2, 0);

        let mut out = CellBuffer::new(0, 0);
        PixelView::new().render_into(canvas.framebuffer(), Viewport::new(2, 1), &mut out);
        assert_eq!(
            out.get(0, 0),
            Some(Cell::new(Rgb::new(255, 0, 0), Rgb::BLACK))
        );
        assert_eq!(out.get(1, 0), out.get(0, 0));
    }

    #[test]
    fn letterbox_is_border_colored() {
        let fb = FrameBuffer::new(4, 4, PixelFormat::Xrgb8888);
        let border = Rgb::new(10, 20, 30);
        let mut out = CellBuffer::new(0, 0);
        PixelView::new()
            .with_border(border)
            .render_into(&fb, Viewport::new(8, 2), &mut out);
        // Image is 4x2 cells centred at column 2.
        assert_eq!(out.get(0, 0), Some(Cell::new(border, border)));
        assert_eq!(out.get(2, 0), Some(Cell::new(Rgb::BLACK, Rgb::BLACK)));
        assert_eq!(out.get(6, 1), Some(Cell::new(border, border)));
    }
}
