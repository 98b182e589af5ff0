//! Mouse and touch
//!
//! Coordinates handed in are relative to the canvas element in CSS pixels;
//! `pos()` reports them in view pixels.

use glam::Vec2;

use super::ButtonState;
use crate::geom::Vector;

/// Cursor position before the first pointer event
const OFFSCREEN: Vec2 = Vec2::new(-9999.0, -9999.0);

#[derive(Debug, Clone)]
pub struct Pointer {
    state: ButtonState,
    cursor: Vec2,
    client_size: Vec2,
    view_size: Vec2,
    pos: Vector,
    is_down: bool,
    is_clicked: bool,
    is_released: bool,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            state: ButtonState::default(),
            cursor: OFFSCREEN,
            client_size: Vec2::ONE,
            view_size: Vec2::ONE,
            pos: Vector::from(OFFSCREEN),
            is_down: false,
            is_clicked: false,
            is_released: false,
        }
    }
}

impl Pointer {
    /// Element size on the page and the logical view size it displays
    pub fn set_screen(&mut self, client_size: Vec2, view_size: Vec2) {
        self.client_size = client_size.max(Vec2::ONE);
        self.view_size = view_size;
    }

    pub fn on_down(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
        self.is_down = true;
        self.is_clicked = true;
    }

    pub fn on_move(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    pub fn on_up(&mut self) {
        self.is_down = false;
        self.is_released = true;
    }

    pub fn update(&mut self) {
        self.pos = Vector::from(self.cursor / self.client_size * self.view_size);
        self.state
            .advance(self.is_clicked, self.is_released, self.is_down);
        self.is_clicked = false;
        self.is_released = false;
    }

    pub fn clear_just_pressed(&mut self) {
        self.state.clear_just_pressed();
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn pos(&self) -> Vector {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_scales_to_view() {
        let mut p = Pointer::default();
        p.set_screen(Vec2::new(400.0, 400.0), Vec2::new(100.0, 100.0));
        p.on_move(200.0, 100.0);
        p.update();
        assert_eq!(p.pos(), Vector::new(50.0, 25.0));
    }

    #[test]
    fn test_click_edges() {
        let mut p = Pointer::default();
        p.on_down(1.0, 1.0);
        p.update();
        assert!(p.state().is_just_pressed);
        p.on_up();
        p.update();
        assert!(p.state().is_just_released);
        assert!(!p.state().is_pressed);
    }
}
