//! One logical button from keyboard + pointer/touch
//!
//! Device callbacks only flip the buffered flags on a source; `Input::update`
//! runs once per accepted frame and turns them into edges.

pub mod keyboard;
pub mod pointer;

use serde::{Deserialize, Serialize};

pub use keyboard::Keyboard;
pub use pointer::Pointer;

use crate::geom::Vector;

/// Pressed state plus one-frame edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub is_pressed: bool,
    pub is_just_pressed: bool,
    pub is_just_released: bool,
}

impl ButtonState {
    /// Advance one frame given the events buffered since the last one
    fn advance(&mut self, pressed_event: bool, released_event: bool, is_down: bool) {
        self.is_just_pressed = !self.is_pressed && pressed_event;
        self.is_just_released = self.is_pressed && released_event;
        self.is_pressed = is_down;
    }

    fn clear_just_pressed(&mut self) {
        self.is_just_pressed = false;
        self.is_just_released = false;
        self.is_pressed = true;
    }
}

/// Unified input for one frame, as recorded in a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub button: ButtonState,
    pub pos: Vector,
}

#[derive(Debug, Clone, Default)]
pub struct Input {
    pub keyboard: Keyboard,
    pub pointer: Pointer,
    state: ButtonState,
    pos: Vector,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample both sources and merge them into one button.
    ///
    /// `is_pressed` and `is_just_released` follow the OR'd pressed signal.
    /// `is_just_pressed` is not a pure edge of that signal: it fires when
    /// either source saw a press since the last frame and the button was up,
    /// so a tap released before the next sample still counts.
    pub fn update(&mut self) {
        self.keyboard.update();
        self.pointer.update();
        let k = self.keyboard.state();
        let p = self.pointer.state();

        let was_pressed = self.state.is_pressed;
        let is_pressed = k.is_pressed || p.is_pressed;
        self.state = ButtonState {
            is_pressed,
            is_just_pressed: !was_pressed && (k.is_just_pressed || p.is_just_pressed),
            is_just_released: was_pressed && !is_pressed,
        };
        self.pos = self.pointer.pos();
    }

    /// Swallow the current press so the next frame does not see a fresh edge
    pub fn clear_just_pressed(&mut self) {
        self.keyboard.clear_just_pressed();
        self.pointer.clear_just_pressed();
        self.state.clear_just_pressed();
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed
    }

    #[inline]
    pub fn is_just_pressed(&self) -> bool {
        self.state.is_just_pressed
    }

    #[inline]
    pub fn is_just_released(&self) -> bool {
        self.state.is_just_released
    }

    /// Pointer position in view pixels
    #[inline]
    pub fn pos(&self) -> Vector {
        self.pos
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            button: self.state,
            pos: self.pos,
        }
    }

    /// Replace the unified state (replay playback); device sources are untouched
    pub fn apply_snapshot(&mut self, snapshot: InputSnapshot) {
        self.state = snapshot.button;
        self.pos = snapshot.pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_edges() {
        let mut input = Input::new();
        input.keyboard.on_key_down();
        input.update();
        assert!(input.is_pressed());
        assert!(input.is_just_pressed());

        input.update();
        assert!(input.is_pressed());
        assert!(!input.is_just_pressed());

        input.keyboard.on_key_up();
        input.update();
        assert!(!input.is_pressed());
        assert!(input.is_just_released());

        input.update();
        assert!(!input.is_just_released());
    }

    #[test]
    fn test_tap_between_frames_still_fires_just_pressed() {
        let mut input = Input::new();
        input.pointer.on_down(10.0, 10.0);
        input.pointer.on_up();
        input.update();
        assert!(input.is_just_pressed());
        assert!(!input.is_pressed());
    }

    #[test]
    fn test_second_source_does_not_retrigger() {
        let mut input = Input::new();
        input.keyboard.on_key_down();
        input.update();
        assert!(input.is_just_pressed());

        // pointer goes down while the key is still held
        input.pointer.on_down(0.0, 0.0);
        input.update();
        assert!(input.is_pressed());
        assert!(!input.is_just_pressed());

        // releasing only the key keeps the button down
        input.keyboard.on_key_up();
        input.update();
        assert!(input.is_pressed());
        assert!(!input.is_just_released());
    }

    #[test]
    fn test_clear_just_pressed_suppresses_edge_once() {
        let mut input = Input::new();
        input.keyboard.on_key_down();
        input.update();
        input.clear_just_pressed();
        assert!(!input.is_just_pressed());
        assert!(input.is_pressed());

        // key was released and pressed again before the next frame
        input.keyboard.on_key_up();
        input.update();
        assert!(input.is_just_released());
        input.keyboard.on_key_down();
        input.update();
        assert!(input.is_just_pressed());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut input = Input::new();
        let snap = InputSnapshot {
            button: ButtonState {
                is_pressed: true,
                is_just_pressed: true,
                is_just_released: false,
            },
            pos: Vector::new(3.0, 4.0),
        };
        input.apply_snapshot(snap);
        assert_eq!(input.snapshot(), snap);
        assert!(input.is_just_pressed());
    }
}
