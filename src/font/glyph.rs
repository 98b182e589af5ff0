//! 6x6 glyph bitmaps
//!
//! A glyph pattern is a block of text rows; each character is either a
//! palette char (`l` = black, `r` = red, ...) or anything else for an empty
//! dot. Patterns narrower or shorter than the cell are centered.

use serde::{Deserialize, Serialize};

use crate::collision::IRect;
use crate::color::Color;
use crate::consts::LETTER_SIZE;

const N: usize = LETTER_SIZE as usize;

/// Per-axis mirroring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mirror {
    pub x: bool,
    pub y: bool,
}

impl Mirror {
    pub const NONE: Self = Self { x: false, y: false };

    pub fn is_none(&self) -> bool {
        !self.x && !self.y
    }
}

/// Rasterized glyph plus the tight bounds of its opaque pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphImage {
    /// Row-major, `Transparent` = empty
    pixels: [[Color; N]; N],
    bounds: IRect,
}

impl GlyphImage {
    pub fn from_pixels(pixels: [[Color; N]; N]) -> Self {
        let bounds = tight_bounds(&pixels);
        Self { pixels, bounds }
    }

    /// Rasterize a pattern whose first and last lines are blank separators
    pub fn from_pattern(pattern: &str) -> Self {
        let lines: Vec<&str> = pattern.split('\n').collect();
        let rows: &[&str] = if lines.len() >= 2 {
            &lines[1..lines.len() - 1]
        } else {
            &[]
        };

        let width = rows.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let x_padding = N.saturating_sub(width).div_ceil(2);
        let y_padding = N.saturating_sub(rows.len()).div_ceil(2);

        let mut pixels = [[Color::Transparent; N]; N];
        for (y, row) in rows.iter().enumerate() {
            let py = y + y_padding;
            if py >= N {
                break;
            }
            for (x, c) in row.chars().take(N - x_padding).enumerate() {
                if let Some(color) = Color::from_pattern_char(c) {
                    pixels[py][x + x_padding] = color;
                }
            }
        }
        Self::from_pixels(pixels)
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y][x]
    }

    /// Tight bounding box of opaque pixels, relative to the cell's top-left
    #[inline]
    pub fn bounds(&self) -> IRect {
        self.bounds
    }

    /// Mirror, rotate by quarter turns (clockwise), then recolor.
    ///
    /// `Black` keeps the pattern's own colors; any other color paints every
    /// opaque pixel.
    pub fn transformed(&self, color: Color, rotation: i32, mirror: Mirror) -> Self {
        let turns = rotation.rem_euclid(4);
        let last = N - 1;
        let mut pixels = [[Color::Transparent; N]; N];
        for (y, row) in self.pixels.iter().enumerate() {
            for (x, &src) in row.iter().enumerate() {
                if src.is_transparent() {
                    continue;
                }
                let mut dx = if mirror.x { last - x } else { x };
                let mut dy = if mirror.y { last - y } else { y };
                for _ in 0..turns {
                    (dx, dy) = (last - dy, dx);
                }
                pixels[dy][dx] = if color == Color::Black { src } else { color };
            }
        }
        Self::from_pixels(pixels)
    }
}

fn tight_bounds(pixels: &[[Color; N]; N]) -> IRect {
    let mut min = (N, N);
    let mut max = (0, 0);
    let mut any = false;
    for (y, row) in pixels.iter().enumerate() {
        for (x, c) in row.iter().enumerate() {
            if c.is_transparent() {
                continue;
            }
            any = true;
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
    }
    if !any {
        return IRect::new(LETTER_SIZE, LETTER_SIZE, 0, 0);
    }
    IRect::new(
        min.0 as i32,
        min.1 as i32,
        (max.0 - min.0 + 1) as i32,
        (max.1 - min.1 + 1) as i32,
    )
}
