//! Palette-indexed pixel buffer
//!
//! All drawing lands here; the host converts it to RGBA once per frame.

use glam::IVec2;

use crate::collision::IRect;
use crate::color::Color;
use crate::font::GlyphImage;
use crate::game::Theme;

/// Frame buffer of palette colors (`Transparent` shows the view background)
#[derive(Debug, Clone)]
pub struct Canvas {
    size: IVec2,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            size: IVec2::new(width, height),
            pixels: vec![Color::Transparent; (width * height) as usize],
        }
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// Reset every pixel to the view background
    pub fn clear(&mut self) {
        self.pixels.fill(Color::Transparent);
    }

    /// Color at a pixel, `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        Some(self.pixels[(y * self.size.x + x) as usize])
    }

    /// Fill a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, rect: &IRect, color: Color) {
        if color.is_transparent() {
            return;
        }
        let min = rect.pos.max(IVec2::ZERO);
        let max = rect.pos.saturating_add(rect.size).min(self.size);
        if min.x >= max.x || min.y >= max.y {
            return;
        }
        for y in min.y..max.y {
            let row = (y * self.size.x) as usize;
            self.pixels[row + min.x as usize..row + max.x as usize].fill(color);
        }
    }

    /// Blit a glyph with its top-left at `pos`, each dot scaled to `scale` pixels
    pub fn draw_glyph(&mut self, glyph: &GlyphImage, pos: IVec2, scale: IVec2) {
        let n = crate::consts::LETTER_SIZE as usize;
        for gy in 0..n {
            for gx in 0..n {
                let c = glyph.pixel(gx, gy);
                if c.is_transparent() {
                    continue;
                }
                let offset = IVec2::new(gx as i32, gy as i32).saturating_mul(scale);
                let dot = IRect {
                    pos: pos.saturating_add(offset),
                    size: scale,
                };
                self.fill_rect(&dot, c);
            }
        }
    }

    /// RGBA pixels with transparent dots replaced by the theme background
    pub fn to_rgba(&self, theme: Theme) -> Vec<[u8; 4]> {
        let [br, bg, bb] = theme.background_rgb();
        self.pixels
            .iter()
            .map(|c| match c.rgb() {
                Some([r, g, b]) => [r, g, b, 255],
                None => [br, bg, bb, 255],
            })
            .collect()
    }

    /// Same as `to_rgba`, flattened for an `ImageData` upload
    pub fn to_rgba_bytes(&self, theme: Theme) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_rgba(theme)).to_vec()
    }
}
