//! Any key counts as the button

use super::ButtonState;

#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    state: ButtonState,
    is_key_pressing: bool,
    is_key_pressed: bool,
    is_key_released: bool,
}

impl Keyboard {
    pub fn on_key_down(&mut self) {
        self.is_key_pressing = true;
        self.is_key_pressed = true;
    }

    pub fn on_key_up(&mut self) {
        self.is_key_pressing = false;
        self.is_key_released = true;
    }

    pub fn update(&mut self) {
        self.state
            .advance(self.is_key_pressed, self.is_key_released, self.is_key_pressing);
        self.is_key_pressed = false;
        self.is_key_released = false;
    }

    pub fn clear_just_pressed(&mut self) {
        self.state.clear_just_pressed();
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }
}
