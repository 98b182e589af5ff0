//! Bitmap font: built-in text glyphs, custom characters and a variant cache

pub mod glyph;
pub mod patterns;

use std::collections::HashMap;

use glam::IVec2;

pub use glyph::{GlyphImage, Mirror};
pub use patterns::TEXT_PATTERNS;

use crate::canvas::Canvas;
use crate::collision::{HitBox, HitTag, IRect};
use crate::color::Color;
use crate::consts::LETTER_SIZE;

const FIRST_GLYPH: u32 = 0x21;
const LAST_GLYPH: u32 = 0x7e;
const GLYPH_COUNT: usize = (LAST_GLYPH - FIRST_GLYPH + 1) as usize;

/// How a string is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    pub color: Color,
    /// Filled behind every printable cell (spaces included); never registered
    pub background: Color,
    /// Quarter turns, any integer
    pub rotation: i32,
    pub mirror: Mirror,
    /// Pixels per glyph dot
    pub scale: IVec2,
    /// Draw from the custom character set instead of the built-in text glyphs
    pub is_character: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            color: Color::Black,
            background: Color::Transparent,
            rotation: 0,
            mirror: Mirror::NONE,
            scale: IVec2::ONE,
            is_character: false,
        }
    }
}

impl TextOptions {
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    fn is_plain(&self) -> bool {
        self.color == Color::Black && self.rotation.rem_euclid(4) == 0 && self.mirror.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GlyphKey {
    c: char,
    is_character: bool,
    color: Color,
    rotation: i32,
    mirror: Mirror,
}

/// Glyph store shared by the drawing facade and the terminal
#[derive(Debug, Clone)]
pub struct Font {
    text: Vec<GlyphImage>,
    characters: Vec<Option<GlyphImage>>,
    cache: HashMap<GlyphKey, GlyphImage>,
    cache_enabled: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self::new()
    }
}

impl Font {
    pub fn new() -> Self {
        Self {
            text: TEXT_PATTERNS.iter().map(|p| GlyphImage::from_pattern(p)).collect(),
            characters: vec![None; GLYPH_COUNT],
            cache: HashMap::new(),
            cache_enabled: false,
        }
    }

    /// Define custom characters from `start` onwards, one pattern each.
    /// Patterns past `~` are dropped.
    pub fn define_characters<S: AsRef<str>>(&mut self, patterns: &[S], start: char) {
        let Some(first) = glyph_index(start) else {
            log::warn!("custom characters cannot start at {start:?}");
            return;
        };
        for (slot, pattern) in self.characters[first..].iter_mut().zip(patterns) {
            *slot = Some(GlyphImage::from_pattern(pattern.as_ref()));
        }
        if patterns.len() > GLYPH_COUNT - first {
            log::warn!(
                "{} custom character patterns dropped",
                patterns.len() - (GLYPH_COUNT - first)
            );
        }
        // a redefined character must not be served from stale variants
        self.cache.retain(|k, _| !k.is_character);
    }

    /// Start keeping recolored/rotated/mirrored variants
    pub fn enable_cache(&mut self) {
        self.cache_enabled = true;
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn cached_variants(&self) -> usize {
        self.cache.len()
    }

    fn base(&self, c: char, is_character: bool) -> Option<&GlyphImage> {
        let i = glyph_index(c)?;
        if is_character {
            self.characters[i].as_ref()
        } else {
            self.text.get(i)
        }
    }

    /// The glyph as it will be drawn with `options`, `None` if undefined
    pub fn glyph(&mut self, c: char, options: &TextOptions) -> Option<GlyphImage> {
        let base = self.base(c, options.is_character)?;
        if options.is_plain() {
            return Some(base.clone());
        }
        let key = GlyphKey {
            c,
            is_character: options.is_character,
            color: options.color,
            rotation: options.rotation.rem_euclid(4),
            mirror: options.mirror,
        };
        if let Some(cached) = self.cache.get(&key) {
            return Some(cached.clone());
        }
        let variant = base.transformed(options.color, key.rotation, options.mirror);
        if self.cache_enabled {
            self.cache.insert(key, variant.clone());
        }
        Some(variant)
    }

    /// Draw one character cell with its top-left at `pos`.
    ///
    /// Returns the glyph's hitbox in canvas space, or `None` when nothing
    /// opaque was drawn (space, control char, transparent color, undefined
    /// custom char).
    pub fn print_char(
        &mut self,
        canvas: &mut Canvas,
        c: char,
        pos: IVec2,
        options: &TextOptions,
    ) -> Option<HitBox> {
        let code = u32::from(c);
        if !(0x20..=LAST_GLYPH).contains(&code) {
            log::trace!("skipping unprintable {c:?}");
            return None;
        }
        let cell = IVec2::splat(LETTER_SIZE).saturating_mul(options.scale);
        if !options.background.is_transparent() {
            canvas.fill_rect(&IRect { pos, size: cell }, options.background);
        }
        if code == 0x20 || options.color.is_transparent() {
            return None;
        }
        let Some(glyph) = self.glyph(c, options) else {
            log::trace!("no glyph defined for {c:?}");
            return None;
        };
        canvas.draw_glyph(&glyph, pos, options.scale);

        let b = glyph.bounds();
        let tag = if options.is_character {
            HitTag::Char(c)
        } else {
            HitTag::Text(c)
        };
        Some(HitBox::new(
            IRect {
                pos: pos.saturating_add(b.pos.saturating_mul(options.scale)),
                size: b.size.saturating_mul(options.scale),
            },
            tag,
        ))
    }

    /// Draw a string with its first cell at `pos`.
    ///
    /// `\n` returns to the starting column one row down; every other char
    /// advances one cell whether or not anything was drawn. Each produced
    /// hitbox is handed to `on_glyph` in drawing order.
    pub fn print(
        &mut self,
        canvas: &mut Canvas,
        s: &str,
        pos: IVec2,
        options: &TextOptions,
        mut on_glyph: impl FnMut(HitBox),
    ) {
        let step = IVec2::splat(LETTER_SIZE) * options.scale;
        let mut cursor = pos;
        for c in s.chars() {
            if c == '\n' {
                cursor.x = pos.x;
                cursor.y = cursor.y.saturating_add(step.y);
                continue;
            }
            if let Some(hit_box) = self.print_char(canvas, c, cursor, options) {
                on_glyph(hit_box);
            }
            cursor.x = cursor.x.saturating_add(step.x);
        }
    }
}

fn glyph_index(c: char) -> Option<usize> {
    let code = u32::from(c);
    (FIRST_GLYPH..=LAST_GLYPH)
        .contains(&code)
        .then(|| (code - FIRST_GLYPH) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_glyphs_have_pixels() {
        let font = Font::new();
        for c in '!'..='~' {
            let g = font.base(c, false).unwrap();
            assert!(g.bounds().size.x > 0, "{c:?} is empty");
        }
    }

    #[test]
    fn test_print_char_hitbox_is_offset_bounds() {
        let mut font = Font::new();
        let mut canvas = Canvas::new(20, 20);
        let hb = font
            .print_char(&mut canvas, '!', IVec2::new(3, 4), &TextOptions::default())
            .unwrap();
        let b = font.base('!', false).unwrap().bounds();
        assert_eq!(hb.rect.pos, IVec2::new(3, 4) + b.pos);
        assert_eq!(hb.rect.size, b.size);
        assert_eq!(hb.tag, HitTag::Text('!'));
    }

    #[test]
    fn test_space_and_transparent_register_nothing() {
        let mut font = Font::new();
        let mut canvas = Canvas::new(20, 20);
        let opts = TextOptions {
            background: Color::Blue,
            ..TextOptions::default()
        };
        assert!(font.print_char(&mut canvas, ' ', IVec2::ZERO, &opts).is_none());
        // the background still paints the cell
        assert_eq!(canvas.pixel(0, 0), Some(Color::Blue));
        let clear = TextOptions::with_color(Color::Transparent);
        assert!(font.print_char(&mut canvas, 'A', IVec2::ZERO, &clear).is_none());
        assert!(font.print_char(&mut canvas, '\u{7f}', IVec2::ZERO, &opts).is_none());
    }

    #[test]
    fn test_undefined_custom_char_is_skipped() {
        let mut font = Font::new();
        let mut canvas = Canvas::new(20, 20);
        let opts = TextOptions {
            is_character: true,
            ..TextOptions::default()
        };
        assert!(font.print_char(&mut canvas, 'a', IVec2::ZERO, &opts).is_none());

        font.define_characters(&["\nll\nll\n"], 'a');
        let hb = font.print_char(&mut canvas, 'a', IVec2::ZERO, &opts).unwrap();
        assert_eq!(hb.tag, HitTag::Char('a'));
        assert_eq!(hb.rect, IRect::new(2, 2, 2, 2));
    }

    #[test]
    fn test_cache_fills_only_when_enabled() {
        let mut font = Font::new();
        let red = TextOptions::with_color(Color::Red);
        font.glyph('A', &red);
        assert_eq!(font.cached_variants(), 0);

        font.enable_cache();
        let first = font.glyph('A', &red).unwrap();
        assert_eq!(font.cached_variants(), 1);
        assert_eq!(font.glyph('A', &red).unwrap(), first);
        // plain black glyphs never touch the cache
        font.glyph('A', &TextOptions::default());
        assert_eq!(font.cached_variants(), 1);
    }

    #[test]
    fn test_rotation_is_wrapped_in_cache_key() {
        let mut font = Font::new();
        font.enable_cache();
        let a = TextOptions {
            rotation: 1,
            ..TextOptions::default()
        };
        let b = TextOptions {
            rotation: 5,
            ..TextOptions::default()
        };
        assert_eq!(font.glyph('L', &a), font.glyph('L', &b));
        assert_eq!(font.cached_variants(), 1);
    }

    #[test]
    fn test_print_newline_and_advance() {
        let mut font = Font::new();
        let mut canvas = Canvas::new(40, 40);
        let mut hits = Vec::new();
        font.print(
            &mut canvas,
            "! !\n!",
            IVec2::new(1, 1),
            &TextOptions::default(),
            |hb| hits.push(hb),
        );
        let b = font.base('!', false).unwrap().bounds();
        let origins: Vec<IVec2> = hits.iter().map(|h| h.rect.pos - b.pos).collect();
        assert_eq!(
            origins,
            vec![IVec2::new(1, 1), IVec2::new(13, 1), IVec2::new(1, 7)]
        );
    }

    #[test]
    fn test_scaled_hitbox() {
        let mut font = Font::new();
        let mut canvas = Canvas::new(40, 40);
        let opts = TextOptions {
            scale: IVec2::new(2, 3),
            ..TextOptions::default()
        };
        let hb = font.print_char(&mut canvas, '!', IVec2::ZERO, &opts).unwrap();
        let b = font.base('!', false).unwrap().bounds();
        assert_eq!(hb.rect.pos, b.pos * IVec2::new(2, 3));
        assert_eq!(hb.rect.size, b.size * IVec2::new(2, 3));
    }
}
