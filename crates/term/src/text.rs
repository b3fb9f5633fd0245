//! Built-in bitmap text, rendered with `embedded-graphics` mono fonts.

use std::convert::Infallible;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_7X13, FONT_9X15},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::core::Surface;
use crate::platform::TextService;
use crate::types::Rgb;

const FONTS: [&MonoFont<'static>; 4] = [&FONT_6X10, &FONT_7X13, &FONT_9X15, &FONT_10X20];

/// Largest built-in font whose glyphs are no taller than `point_size`
/// (the smallest one if none fit).
pub fn font_for(point_size: u32) -> &'static MonoFont<'static> {
    FONTS
        .iter()
        .rev()
        .find(|f| f.character_size.height <= point_size)
        .copied()
        .unwrap_or(FONTS[0])
}

/// Text service backed by the fixed set of ASCII mono fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoText;

impl MonoText {
    pub fn new() -> Self {
        Self
    }
}

impl TextService for MonoText {
    fn render(&mut self, text: &str, point_size: u32, color: Rgb) -> Option<Surface> {
        let font = font_for(point_size);
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return None;
        }
        let width = chars * font.character_size.width + (chars - 1) * font.character_spacing;
        let mut target = CoverageTarget(Surface::new(width, font.character_size.height, color));

        let style = MonoTextStyle::new(font, BinaryColor::On);
        match Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut target) {
            Ok(_) => Some(target.0),
            Err(never) => match never {},
        }
    }
}

/// Adapts a [`Surface`] as a one-bit draw target.
struct CoverageTarget(Surface);

impl DrawTarget for CoverageTarget {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || color != BinaryColor::On {
                continue;
            }
            self.0.set_coverage(x as u32, y as u32, 255);
        }
        Ok(())
    }
}

impl OriginDimensions for CoverageTarget {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}
