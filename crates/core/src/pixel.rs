//! Packed pixel formats.

use crate::types::Rgb;

/// Layout of a 32-bit packed pixel.
///
/// The high byte is padding in both formats. It is written as zero by
/// [`PixelFormat::pack`] and otherwise left alone by the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// `0x00RRGGBB`
    #[default]
    Xrgb8888,
    /// `0x00BBGGRR`
    Xbgr8888,
}

const PADDING_MASK: u32 = 0xFF00_0000;

impl PixelFormat {
    /// Pack a color into this format.
    #[inline]
    pub fn pack(self, rgb: Rgb) -> u32 {
        let (r, g, b) = (rgb.r as u32, rgb.g as u32, rgb.b as u32);
        match self {
            PixelFormat::Xrgb8888 => (r << 16) | (g << 8) | b,
            PixelFormat::Xbgr8888 => (b << 16) | (g << 8) | r,
        }
    }

    /// Unpack a pixel of this format. The padding byte is ignored.
    #[inline]
    pub fn unpack(self, px: u32) -> Rgb {
        let hi = (px >> 16) as u8;
        let mid = (px >> 8) as u8;
        let lo = px as u8;
        match self {
            PixelFormat::Xrgb8888 => Rgb::new(hi, mid, lo),
            PixelFormat::Xbgr8888 => Rgb::new(lo, mid, hi),
        }
    }

    /// Replace the color channels of `px`, keeping its padding byte.
    #[inline]
    pub fn repack(self, px: u32, rgb: Rgb) -> u32 {
        (px & PADDING_MASK) | self.pack(rgb)
    }

    /// Parse a format name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xrgb8888" | "xrgb" => Some(PixelFormat::Xrgb8888),
            "xbgr8888" | "xbgr" => Some(PixelFormat::Xbgr8888),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PixelFormat::Xrgb8888 => "xrgb8888",
            PixelFormat::Xbgr8888 => "xbgr8888",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xrgb_layout() {
        let px = PixelFormat::Xrgb8888.pack(Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(px, 0x0012_3456);
        assert_eq!(PixelFormat::Xrgb8888.unpack(px), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn xbgr_layout() {
        let px = PixelFormat::Xbgr8888.pack(Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(px, 0x0056_3412);
        assert_eq!(PixelFormat::Xbgr8888.unpack(px), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn repack_keeps_padding() {
        let px = 0xAB00_0000 | PixelFormat::Xrgb8888.pack(Rgb::WHITE);
        let out = PixelFormat::Xrgb8888.repack(px, Rgb::BLACK);
        assert_eq!(out, 0xAB00_0000);
    }

    #[test]
    fn parse_names() {
        assert_eq!(PixelFormat::from_str("XRGB8888"), Some(PixelFormat::Xrgb8888));
        assert_eq!(PixelFormat::from_str("xbgr"), Some(PixelFormat::Xbgr8888));
        assert_eq!(PixelFormat::from_str("rgb565"), None);
    }
}
