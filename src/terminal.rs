//! Character-cell overlay
//!
//! A grid of `LETTER_SIZE` cells covering the view. Used for the HUD and the
//! title / game over text; drawing it rasterizes glyphs without registering
//! hitboxes.

use glam::IVec2;

use crate::canvas::Canvas;
use crate::consts::LETTER_SIZE;
use crate::font::{Font, TextOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub c: char,
    pub options: TextOptions,
}

#[derive(Debug, Clone)]
pub struct Terminal {
    size: IVec2,
    /// Row-major
    cells: Vec<Option<Cell>>,
}

impl Terminal {
    /// Grid of `size` cells
    pub fn new(size: IVec2) -> Self {
        let size = size.max(IVec2::ZERO);
        Self {
            size,
            cells: vec![None; (size.x * size.y) as usize],
        }
    }

    /// Grid covering a view of `view_size` pixels
    pub fn for_view(view_size: IVec2) -> Self {
        Self::new(view_size / LETTER_SIZE)
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        Some((y * self.size.x + x) as usize)
    }

    /// Write a string starting at cell (x, y). Cells outside the grid are
    /// skipped but still advance the cursor; `\n` moves to the next row at
    /// the starting column.
    pub fn print(&mut self, s: &str, x: i32, y: i32, options: &TextOptions) {
        let (mut cx, mut cy) = (x, y);
        for c in s.chars() {
            if c == '\n' {
                cx = x;
                cy += 1;
                continue;
            }
            if let Some(i) = self.index(cx, cy) {
                self.cells[i] = Some(Cell {
                    c,
                    options: *options,
                });
            }
            cx += 1;
        }
    }

    pub fn get_char_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Out-of-grid positions are ignored
    pub fn set_char_at(&mut self, x: i32, y: i32, c: char, options: &TextOptions) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(Cell {
                c,
                options: *options,
            });
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Shift every row up by one; the bottom row becomes empty
    pub fn scroll_up(&mut self) {
        let w = self.size.x as usize;
        if w == 0 || self.cells.is_empty() {
            return;
        }
        self.cells.rotate_left(w);
        let len = self.cells.len();
        self.cells[len - w..].fill(None);
    }

    pub fn draw(&self, canvas: &mut Canvas, font: &mut Font) {
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                let Some(cell) = self.get_char_at(x, y) else {
                    continue;
                };
                let options = TextOptions {
                    scale: IVec2::ONE,
                    ..cell.options
                };
                // terminal glyphs are overlay only
                let _ = font.print_char(
                    canvas,
                    cell.c,
                    IVec2::new(x, y) * LETTER_SIZE,
                    &options,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_size_from_view() {
        let t = Terminal::for_view(IVec2::new(100, 100));
        assert_eq!(t.size(), IVec2::new(16, 16));
    }

    #[test]
    fn test_print_clips_but_advances() {
        let mut t = Terminal::new(IVec2::new(4, 2));
        t.print("abcdef", -2, 0, &TextOptions::default());
        assert_eq!(t.get_char_at(0, 0).map(|c| c.c), Some('c'));
        assert_eq!(t.get_char_at(3, 0).map(|c| c.c), Some('f'));

        t.print("x\ny\nz", 1, 0, &TextOptions::default());
        assert_eq!(t.get_char_at(1, 0).map(|c| c.c), Some('x'));
        assert_eq!(t.get_char_at(1, 1).map(|c| c.c), Some('y'));
        assert_eq!(t.get_char_at(1, 2), None);
    }

    #[test]
    fn test_set_char_and_clear() {
        let mut t = Terminal::new(IVec2::new(3, 3));
        let opts = TextOptions::with_color(Color::Red);
        t.set_char_at(2, 2, 'Q', &opts);
        t.set_char_at(3, 0, 'Z', &opts);
        assert_eq!(t.get_char_at(2, 2), Some(Cell { c: 'Q', options: opts }));
        assert_eq!(t.get_char_at(3, 0), None);
        t.clear();
        assert_eq!(t.get_char_at(2, 2), None);
    }

    #[test]
    fn test_scroll_up() {
        let mut t = Terminal::new(IVec2::new(2, 3));
        t.print("ab\ncd\nef", 0, 0, &TextOptions::default());
        t.scroll_up();
        assert_eq!(t.get_char_at(0, 0).map(|c| c.c), Some('c'));
        assert_eq!(t.get_char_at(1, 1).map(|c| c.c), Some('f'));
        assert_eq!(t.get_char_at(0, 2), None);
    }

    #[test]
    fn test_draw_rasterizes_cells() {
        let mut t = Terminal::new(IVec2::new(2, 1));
        t.print("!", 1, 0, &TextOptions::default());
        let mut canvas = Canvas::new(12, 6);
        let mut font = Font::new();
        t.draw(&mut canvas, &mut font);
        let drawn = (0..6).any(|y| (6..12).any(|x| canvas.pixel(x, y) == Some(Color::Black)));
        assert!(drawn);
        assert!((0..6).all(|y| (0..6).all(|x| canvas.pixel(x, y) == Some(Color::Transparent))));
    }
}
