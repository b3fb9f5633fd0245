//! Drawing primitives over a framebuffer and a foreground/background color pair.
//!
//! Every primitive fills with the current foreground color; only [`Canvas::clear`]
//! uses the background. Coordinates are plain pixel integers. Nothing is
//! validated: off-screen or inverted arguments are clipped or normalised, never
//! reported.

use crate::framebuffer::FrameBuffer;
use crate::pixel::PixelFormat;
use crate::surface::Surface;
use crate::types::{Rgb, FADE_DENOMINATOR, FADE_NUMERATOR};

/// The foreground/background register pair read by every primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRegisters {
    pub foreground: u32,
    pub background: u32,
}

impl ColorRegisters {
    /// White on black in the given format.
    pub fn new(format: PixelFormat) -> Self {
        Self {
            foreground: format.pack(Rgb::WHITE),
            background: format.pack(Rgb::BLACK),
        }
    }
}

/// A framebuffer plus the color registers used to draw into it.
#[derive(Debug, Clone)]
pub struct Canvas {
    fb: FrameBuffer,
    colors: ColorRegisters,
}

impl Canvas {
    pub fn new(fb: FrameBuffer) -> Self {
        let colors = ColorRegisters::new(fb.format());
        Self { fb, colors }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn width(&self) -> u32 {
        self.fb.width()
    }

    pub fn height(&self) -> u32 {
        self.fb.height()
    }

    pub fn colors(&self) -> ColorRegisters {
        self.colors
    }

    /// Pack a color for the active pixel format.
    pub fn rgb_pack(&self, rgb: Rgb) -> u32 {
        self.fb.format().pack(rgb)
    }

    pub fn set_foreground(&mut self, color: u32) {
        self.colors.foreground = color;
    }

    pub fn set_background(&mut self, color: u32) {
        self.colors.background = color;
    }

    /// Fill the whole surface with the background color.
    pub fn clear(&mut self) {
        self.fb.fill(self.colors.background);
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32) {
        self.fb.put_pixel(x, y, self.colors.foreground);
    }

    /// Columns `[min(x1, x2), max(x1, x2))` of row `y`. Negative `y` draws nothing.
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32) {
        if y < 0 {
            return;
        }
        let (a, b) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        self.fb.fill_span(a, b, y, self.colors.foreground);
    }

    /// Rows `[min(y1, y2), max(y1, y2))` of column `x`.
    pub fn vline(&mut self, x: i32, y1: i32, y2: i32) {
        let (a, b) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        self.fb.fill_column(x, a, b, self.colors.foreground);
    }

    /// Outline of the `w`×`h` region anchored at `(x, y)`.
    ///
    /// The outline covers exactly the border pixels of what [`Canvas::fill_rect`]
    /// would fill with the same arguments.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w);
        let bottom = y.saturating_add(h);
        self.hline(x, right, y);
        self.hline(x, right, bottom - 1);
        self.vline(x, y, bottom);
        self.vline(right - 1, y, bottom);
    }

    /// Filled `w`×`h` rectangle anchored at `(x, y)`, clipped to the surface.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w);
        let top = y.max(0);
        let bottom = y.saturating_add(h).min(self.fb.height() as i32);
        for row in top..bottom {
            self.fb.fill_span(x, right, row, self.colors.foreground);
        }
    }

    /// Scan-line fill of the triangle with the given corners.
    pub fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) {
        let mut verts = [(x1, y1), (x2, y2), (x3, y3)];
        verts.sort_unstable_by_key(|v| v.1);
        let [(vx0, vy0), (vx1, vy1), (vx2, vy2)] = verts;

        if vy0 == vy2 {
            let min_x = vx0.min(vx1).min(vx2);
            let max_x = vx0.max(vx1).max(vx2);
            self.span_inclusive(min_x, max_x, vy0);
            return;
        }

        let first = vy0.max(0);
        let last = vy2.min(self.fb.height() as i32 - 1);
        for y in first..=last {
            let x_02 = edge_x(vx0, vy0, vx2, vy2, y);
            let mut x_min = x_02;
            let mut x_max = x_02;

            if y <= vy1 && vy0 != vy1 {
                let x_01 = edge_x(vx0, vy0, vx1, vy1, y);
                x_min = x_min.min(x_01);
                x_max = x_max.max(x_01);
            }
            if y >= vy1 && vy1 != vy2 {
                let x_12 = edge_x(vx1, vy1, vx2, vy2, y);
                x_min = x_min.min(x_12);
                x_max = x_max.max(x_12);
            }
            if y == vy1 {
                x_min = x_min.min(vx1);
                x_max = x_max.max(vx1);
            }

            self.span_inclusive(x_min, x_max, y);
        }
    }

    /// Filled disk of radius `r` centred on `(cx, cy)`.
    ///
    /// Midpoint circle walk over one octant; every step emits four horizontal
    /// spans mirrored through the centre, so the disk is built from O(r) spans.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32) {
        log::trace!("fill_circle {} {} {}", cx, cy, r);
        if r < 0 {
            return;
        }
        let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
        let (w, h) = (self.fb.width() as i64, self.fb.height() as i64);
        if cx + r < 0 || cx - r >= w || cy + r < 0 || cy - r >= h {
            return;
        }

        let mut d = 3 - 2 * r;
        let mut x = 0;
        let mut y = r;
        while x <= y {
            self.span_wide(cx - x, cx + x, cy + y);
            self.span_wide(cx - x, cx + x, cy - y);
            self.span_wide(cx - y, cx + y, cy + x);
            self.span_wide(cx - y, cx + y, cy - x);
            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    /// Composite a coverage surface with its top-left corner at `(x, y)`.
    pub fn blit(&mut self, surface: &Surface, x: i32, y: i32) {
        let format = self.fb.format();
        let src = surface.color();
        for sy in 0..surface.height() {
            for sx in 0..surface.width() {
                let alpha = surface.coverage(sx, sy);
                if alpha == 0 {
                    continue;
                }
                let dx = x.saturating_add(sx as i32);
                let dy = y.saturating_add(sy as i32);
                let Some(dst) = self.fb.pixel(dx, dy) else {
                    continue;
                };
                let blended = blend(src, format.unpack(dst), alpha);
                self.fb.put_pixel(dx, dy, format.repack(dst, blended));
            }
        }
    }

    /// Darken every visible pixel one fade step (each channel × 19/20).
    pub fn fade_step(&mut self) {
        let format = self.fb.format();
        self.fb.map_pixels(|px| {
            let c = format.unpack(px);
            format.repack(px, Rgb::new(fade(c.r), fade(c.g), fade(c.b)))
        });
    }

    #[inline]
    fn span_inclusive(&mut self, x1: i32, x2: i32, y: i32) {
        self.hline(x1, x2.saturating_add(1), y);
    }

    // Inclusive span in widened coordinates; clamped just outside the surface.
    #[inline]
    fn span_wide(&mut self, x1: i64, x2: i64, y: i64) {
        if y < 0 || y >= self.fb.height() as i64 {
            return;
        }
        let w = self.fb.width() as i64;
        let x1 = x1.clamp(-1, w) as i32;
        let x2 = x2.clamp(-1, w) as i32;
        self.span_inclusive(x1, x2, y as i32);
    }
}

#[inline]
fn fade(channel: u8) -> u8 {
    (channel as u32 * FADE_NUMERATOR / FADE_DENOMINATOR) as u8
}

#[inline]
fn blend(src: Rgb, dst: Rgb, alpha: u8) -> Rgb {
    let a = alpha as u32;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
    Rgb::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b))
}

fn edge_x(x0: i32, y0: i32, x1: i32, y1: i32, y: i32) -> i32 {
    if y1 == y0 {
        return x0;
    }
    let t = (x1 as i64 - x0 as i64) * (y as i64 - y0 as i64) / (y1 as i64 - y0 as i64);
    (x0 as i64 + t) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 16;
    const H: i32 = 16;

    fn canvas() -> Canvas {
        Canvas::new(FrameBuffer::new(W as u32, H as u32, PixelFormat::Xrgb8888))
    }

    fn lit(c: &Canvas) -> Vec<(i32, i32)> {
        let fg = c.colors().foreground;
        let mut out = Vec::new();
        for y in 0..H {
            for x in 0..W {
                if c.framebuffer().pixel(x, y) == Some(fg) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_registers_start_white_on_black() {
        let c = canvas();
        assert_eq!(c.colors().foreground, 0x00FF_FFFF);
        assert_eq!(c.colors().background, 0);
    }

    #[test]
    fn test_clear_uses_background() {
        let mut c = canvas();
        c.set_background(0x0000_00FF);
        c.clear();
        assert_eq!(c.framebuffer().pixel(5, 5), Some(0x0000_00FF));
    }

    #[test]
    fn test_color_change_is_not_retroactive() {
        let mut c = canvas();
        c.draw_pixel(1, 1);
        c.set_foreground(0x0000_FF00);
        c.draw_pixel(2, 1);
        assert_eq!(c.framebuffer().pixel(1, 1), Some(0x00FF_FFFF));
        assert_eq!(c.framebuffer().pixel(2, 1), Some(0x0000_FF00));
    }

    #[test]
    fn test_hline_half_open() {
        let mut c = canvas();
        c.hline(2, 5, 3);
        assert_eq!(lit(&c), vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_hline_negative_row_is_noop() {
        let mut c = canvas();
        c.hline(0, 5, -1);
        assert!(lit(&c).is_empty());
    }

    #[test]
    fn test_hline_inverted_endpoints() {
        let mut a = canvas();
        let mut b = canvas();
        a.hline(2, 9, 4);
        b.hline(9, 2, 4);
        assert_eq!(lit(&a), lit(&b));
    }

    #[test]
    fn test_vline_half_open() {
        let mut c = canvas();
        c.vline(7, 1, 4);
        assert_eq!(lit(&c), vec![(7, 1), (7, 2), (7, 3)]);
    }

    #[test]
    fn test_draw_rect_outline() {
        let mut c = canvas();
        c.draw_rect(2, 3, 4, 3);
        let px = lit(&c);
        for x in 2..6 {
            assert!(px.contains(&(x, 3)));
            assert!(px.contains(&(x, 5)));
        }
        for y in 3..6 {
            assert!(px.contains(&(2, y)));
            assert!(px.contains(&(5, y)));
        }
        assert!(!px.contains(&(3, 4)));
        assert!(!px.contains(&(6, 3)));
        assert!(!px.contains(&(2, 6)));
        assert_eq!(px.len(), 10);
    }

    #[test]
    fn test_draw_rect_degenerate() {
        let mut c = canvas();
        c.draw_rect(2, 2, 0, 5);
        c.draw_rect(2, 2, 5, -1);
        assert!(lit(&c).is_empty());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut c = canvas();
        c.fill_rect(-2, -2, 4, 4);
        assert_eq!(lit(&c), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_circle_radius_zero_is_centre() {
        let mut c = canvas();
        c.fill_circle(8, 8, 0);
        assert_eq!(lit(&c), vec![(8, 8)]);
    }

    #[test]
    fn test_circle_negative_radius() {
        let mut c = canvas();
        c.fill_circle(8, 8, -3);
        assert!(lit(&c).is_empty());
    }

    #[test]
    fn test_circle_at_coordinate_extremes() {
        let mut c = canvas();
        c.fill_circle(i32::MAX - 2, 5, 5);
        c.fill_circle(i32::MIN + 2, 5, 5);
        c.fill_circle(5, i32::MAX, 5);
        c.fill_circle(5, i32::MIN, 5);
        assert!(lit(&c).is_empty());

        c.fill_circle(8, 8, 1 << 16);
        assert_eq!(lit(&c).len(), (W * H) as usize);
    }

    #[test]
    fn test_circle_radius_one() {
        let mut c = canvas();
        c.fill_circle(8, 8, 1);
        let px = lit(&c);
        assert_eq!(px, vec![(8, 7), (7, 8), (8, 8), (9, 8), (8, 9)]);
    }

    #[test]
    fn test_triangle_contains_centroid_and_corners() {
        let mut c = canvas();
        c.fill_triangle(8, 1, 1, 14, 14, 14);
        let px = lit(&c);
        assert!(px.contains(&(8, 10)));
        assert!(px.contains(&(8, 1)));
        assert!(px.contains(&(1, 14)));
        assert!(px.contains(&(14, 14)));
        assert!(!px.contains(&(1, 1)));
        assert!(!px.contains(&(14, 2)));
    }

    #[test]
    fn test_triangle_flat() {
        let mut c = canvas();
        c.fill_triangle(3, 5, 9, 5, 6, 5);
        assert_eq!(lit(&c).len(), 7);
    }

    #[test]
    fn test_fade_step_scales_channels() {
        let mut c = canvas();
        c.set_background(c.rgb_pack(Rgb::new(200, 100, 20)));
        c.clear();
        c.fade_step();
        let px = c.framebuffer().pixel(0, 0).unwrap();
        assert_eq!(PixelFormat::Xrgb8888.unpack(px), Rgb::new(190, 95, 19));
    }

    #[test]
    fn test_blit_blends_coverage() {
        let mut c = canvas();
        let mut s = Surface::new(2, 1, Rgb::WHITE);
        s.set_coverage(0, 0, 255);
        s.set_coverage(1, 0, 0);
        c.blit(&s, 3, 3);
        assert_eq!(c.framebuffer().pixel(3, 3), Some(0x00FF_FFFF));
        assert_eq!(c.framebuffer().pixel(4, 3), Some(0));
    }

    #[test]
    fn test_blit_partial_coverage() {
        let mut c = canvas();
        let mut s = Surface::new(1, 1, Rgb::WHITE);
        s.set_coverage(0, 0, 51);
        c.blit(&s, 0, 0);
        let px = c.framebuffer().pixel(0, 0).unwrap();
        assert_eq!(PixelFormat::Xrgb8888.unpack(px), Rgb::new(51, 51, 51));
    }

    #[test]
    fn test_blit_clips_offscreen() {
        let mut c = canvas();
        let mut s = Surface::new(4, 4, Rgb::WHITE);
        for y in 0..4 {
            for x in 0..4 {
                s.set_coverage(x, y, 255);
            }
        }
        c.blit(&s, W - 2, -2);
        assert_eq!(lit(&c), vec![(W - 2, 0), (W - 1, 0), (W - 2, 1), (W - 1, 1)]);
    }
}
