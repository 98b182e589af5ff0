//! Hitboxes and collision results

use std::collections::BTreeSet;

use glam::IVec2;

use crate::color::{Color, ColorSet};

/// Axis-aligned integer rectangle (top-left + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IRect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl IRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Open-interval overlap: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &IRect) -> bool {
        // widened so far-apart rects cannot overflow
        let ox = i64::from(other.pos.x) - i64::from(self.pos.x);
        let oy = i64::from(other.pos.y) - i64::from(self.pos.y);
        -i64::from(other.size.x) < ox
            && ox < i64::from(self.size.x)
            && -i64::from(other.size.y) < oy
            && oy < i64::from(self.size.y)
    }
}

/// What a hitbox was drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTag {
    /// Filled rectangle / line segment in a palette color
    Rect(Color),
    /// Built-in text glyph
    Text(char),
    /// Custom character glyph
    Char(char),
}

/// A drawn region registered for overlap queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitBox {
    pub rect: IRect,
    pub tag: HitTag,
}

impl HitBox {
    pub fn new(rect: IRect, tag: HitTag) -> Self {
        Self { rect, tag }
    }
}

/// Union of the tags of every hitbox a query overlapped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collision {
    pub rect: ColorSet,
    pub text: BTreeSet<char>,
    pub char: BTreeSet<char>,
}

impl Collision {
    pub fn add_tag(&mut self, tag: HitTag) {
        match tag {
            HitTag::Rect(c) => self.rect.insert(c),
            HitTag::Text(c) => {
                self.text.insert(c);
            }
            HitTag::Char(c) => {
                self.char.insert(c);
            }
        }
    }

    /// Fold another result into this one
    pub fn merge(&mut self, other: Collision) {
        self.rect = self.rect.union(other.rect);
        self.text.extend(other.text);
        self.char.extend(other.char);
    }

    pub fn is_empty(&self) -> bool {
        self.rect.is_empty() && self.text.is_empty() && self.char.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = IRect::new(0, 0, 10, 10);
        let b = IRect::new(10, 0, 10, 10);
        let c = IRect::new(0, 10, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_one_pixel_overlap() {
        let a = IRect::new(0, 0, 10, 10);
        let b = IRect::new(9, 9, 10, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_zero_size_never_overlaps() {
        let a = IRect::new(0, 0, 10, 10);
        let empty = IRect::new(5, 5, 0, 0);
        assert!(!a.overlaps(&empty));
        assert!(!empty.overlaps(&a));
    }

    #[test]
    fn test_far_apart_rects_do_not_overflow() {
        let left = IRect::new(-2_000_000_000, 0, 1, 1);
        let right = IRect::new(2_000_000_000, 0, 1, 1);
        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));

        let huge = IRect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert!(huge.overlaps(&IRect::new(-5, -5, 1, 1)));
        assert!(!huge.overlaps(&IRect::new(5, 5, 1, 1)));
    }

    #[test]
    fn test_merge_unions_tags() {
        let mut a = Collision::default();
        a.add_tag(HitTag::Rect(Color::Red));
        let mut b = Collision::default();
        b.add_tag(HitTag::Rect(Color::Blue));
        b.add_tag(HitTag::Text('A'));
        a.merge(b);
        assert!(a.rect.contains(Color::Red));
        assert!(a.rect.contains(Color::Blue));
        assert!(a.text.contains(&'A'));
        assert!(a.char.is_empty());
    }

    proptest! {
        #[test]
        fn prop_separated_rects_never_overlap(
            x in -50i32..50, y in -50i32..50,
            w in 1i32..20, h in 1i32..20,
            w2 in 1i32..20, h2 in 1i32..20,
            gap in 0i32..10, dy in -30i32..30,
        ) {
            let a = IRect::new(x, y, w, h);
            // b starts at or past a's right edge
            let b = IRect::new(x + w + gap, y + dy, w2, h2);
            prop_assert!(!a.overlaps(&b));
            prop_assert!(!b.overlaps(&a));
        }

        #[test]
        fn prop_overlap_is_symmetric(
            ax in -20i32..20, ay in -20i32..20, aw in 0i32..15, ah in 0i32..15,
            bx in -20i32..20, by in -20i32..20, bw in 0i32..15, bh in 0i32..15,
        ) {
            let a = IRect::new(ax, ay, aw, ah);
            let b = IRect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
