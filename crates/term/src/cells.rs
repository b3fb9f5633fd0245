//! Half-block cell grid.
//!
//! Each terminal cell shows two vertically stacked pixels with `▀`: the
//! foreground color paints the top half and the background the bottom half.

use crate::types::Rgb;

/// Glyph used for every cell.
pub const HALF_BLOCK: char = '\u{2580}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl Cell {
    pub const fn new(top: Rgb, bottom: Rgb) -> Self {
        Self { top, bottom }
    }
}

/// 2D grid of half-block cells, in terminal columns and rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers redraw every cell.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_out_of_bounds() {
        let mut cb = CellBuffer::new(3, 2);
        let red = Cell::new(Rgb::new(255, 0, 0), Rgb::BLACK);
        cb.set(2, 1, red);
        cb.set(3, 0, red);
        assert_eq!(cb.get(2, 1), Some(red));
        assert_eq!(cb.get(3, 0), None);
        assert_eq!(cb.cells().iter().filter(|c| **c == red).count(), 1);
    }

    #[test]
    fn resize_changes_len() {
        let mut cb = CellBuffer::new(4, 4);
        cb.resize(2, 3);
        assert_eq!((cb.width(), cb.height()), (2, 3));
        assert_eq!(cb.cells().len(), 6);
    }
}
