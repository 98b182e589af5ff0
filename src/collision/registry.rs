//! Per-frame hitbox registry
//!
//! Two lists: `main` is what queries see; `pending` collects the segments of a
//! line/bar while it is being drawn and is flushed into `main` when the line
//! call finishes. Queries never look at `pending`.

use super::hitbox::{Collision, HitBox, IRect};

#[derive(Debug, Default)]
pub struct HitBoxRegistry {
    main: Vec<HitBox>,
    pending: Vec<HitBox>,
}

impl HitBoxRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty both lists (start of frame)
    pub fn clear(&mut self) {
        self.main.clear();
        self.pending.clear();
    }

    pub fn register(&mut self, hit_box: HitBox, to_batch: bool) {
        if to_batch {
            self.pending.push(hit_box);
        } else {
            self.main.push(hit_box);
        }
    }

    /// Move the pending batch into the visible list
    pub fn flush_batch(&mut self) {
        self.main.append(&mut self.pending);
    }

    /// Tags of every visible hitbox overlapping `rect`
    pub fn query(&self, rect: &IRect) -> Collision {
        let mut collision = Collision::default();
        for hit_box in self.main.iter().filter(|h| rect.overlaps(&h.rect)) {
            collision.add_tag(hit_box.tag);
        }
        collision
    }

    pub fn len(&self) -> usize {
        self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn hit_boxes(&self) -> &[HitBox] {
        &self.main
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::HitTag;
    use crate::color::Color;

    fn red(x: i32, y: i32, w: i32, h: i32) -> HitBox {
        HitBox::new(IRect::new(x, y, w, h), HitTag::Rect(Color::Red))
    }

    #[test]
    fn test_query_sees_main_only() {
        let mut reg = HitBoxRegistry::new();
        reg.register(red(0, 0, 10, 10), true);
        assert!(reg.query(&IRect::new(2, 2, 2, 2)).is_empty());
        assert_eq!(reg.pending_len(), 1);

        reg.flush_batch();
        assert_eq!(reg.pending_len(), 0);
        assert!(reg.query(&IRect::new(2, 2, 2, 2)).rect.contains(Color::Red));
    }

    #[test]
    fn test_clear_empties_both_lists() {
        let mut reg = HitBoxRegistry::new();
        reg.register(red(0, 0, 10, 10), false);
        reg.register(red(0, 0, 10, 10), true);
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.pending_len(), 0);
    }

    #[test]
    fn test_query_accumulates_all_overlaps() {
        let mut reg = HitBoxRegistry::new();
        reg.register(red(0, 0, 10, 10), false);
        reg.register(
            HitBox::new(IRect::new(5, 0, 10, 10), HitTag::Rect(Color::Blue)),
            false,
        );
        reg.register(
            HitBox::new(IRect::new(50, 50, 6, 6), HitTag::Text('x')),
            false,
        );
        let c = reg.query(&IRect::new(6, 2, 2, 2));
        assert!(c.rect.contains(Color::Red));
        assert!(c.rect.contains(Color::Blue));
        assert!(c.text.is_empty());
    }
}
