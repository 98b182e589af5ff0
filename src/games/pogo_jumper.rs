//! PogoJumper
//!
//! A pogo stick on a scrolling floor. Press to jump, hold to spin; release
//! and hold again to spin back. Blue platforms slide in along the ground and
//! end the run on contact.

use super::MAX_PUSH_OUT;
use crate::audio::SoundEffect;
use crate::color::Color;
use crate::console::Console;
use crate::game::{Game, GameOptions, Theme};
use crate::geom::{Vector, vec};

const DESCRIPTION: &str = "
  [Press] to jump
  [hold] to spin
  release n' hold
  to spin other
  way
";

const STICK_LENGTH: f32 = 10.0;
const STICK_THICKNESS: f32 = 2.0;

#[derive(Debug, Clone, Default)]
pub struct PogoJumper {
    p: Vector,
    v: Vector,
    /// Stick angle
    r: f32,
    floors: Vec<Vector>,
    jump_power: f32,
    floor_app_dist: f32,
    is_first_pressing: bool,
    /// Spinning forward (true) or back
    r_dir: bool,
}

impl PogoJumper {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        *self = Self {
            p: vec(50.0, 50.0),
            v: Vector::ZERO,
            r: 0.0,
            floors: vec![vec(95.0, 100.0)],
            jump_power: 1.0,
            floor_app_dist: 1.0,
            is_first_pressing: true,
            r_dir: true,
        };
    }

    pub fn pos(&self) -> Vector {
        self.p
    }

    pub fn floors(&self) -> &[Vector] {
        &self.floors
    }
}

impl Game for PogoJumper {
    fn title(&self) -> &str {
        "PogoJumper"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn options(&self) -> GameOptions {
        GameOptions {
            is_playing_bgm: true,
            is_replay_enabled: true,
            theme: Theme::ShapeDark,
            ..GameOptions::default()
        }
    }

    fn update(&mut self, con: &mut Console) {
        if con.ticks() == 0 {
            self.reset();
        }
        self.p.add(self.v);
        self.v.y += if con.input().is_pressed() { 0.05 } else { 0.2 };
        let climb = if self.p.y < 30.0 {
            (30.0 - self.p.y) * 0.1
        } else {
            0.0
        };
        let scr = climb + con.difficulty() * 0.1;
        con.add_score(scr);
        self.floor_app_dist -= scr;
        if self.floor_app_dist < 0.0 {
            self.floor_app_dist = con.rnd(99.0);
            let x = con.rnd(99.0);
            self.floors.push(vec(x, -9.0));
        }
        self.p.y += scr;

        con.color(Color::Blue);
        self.floors.retain_mut(|f| {
            f.x -= 1.0;
            con.box_(*f, 10.0, 5.0);
            if f.x < 0.0 {
                f.set_xy(100.0, 95.0);
            }
            f.y < 99.0
        });

        con.color(Color::Red);
        con.box_(vec(50.0, 100.0), 50.0, 5.0);

        // push the stick out of the ground; touching a platform ends the run
        con.color(Color::Transparent);
        for _ in 0..MAX_PUSH_OUT {
            let hit = con.bar(self.p, STICK_LENGTH, STICK_THICKNESS, self.r, 0.5);
            if !hit.rect.contains(Color::Red) {
                break;
            }
            if hit.rect.contains(Color::Blue) {
                con.end();
            }
            self.p.y -= 1.0;
            self.v.set_xy(0.0, 0.0);
            self.jump_power = 1.0;
            self.is_first_pressing = true;
            self.r_dir = true;
        }

        con.color(Color::Green);
        con.bar(self.p, STICK_LENGTH, STICK_THICKNESS, self.r, 0.5);

        let input = con.input().snapshot().button;
        if input.is_pressed && !self.is_first_pressing && self.r_dir {
            self.r += 0.1;
            self.jump_power *= 1.1;
        }
        if input.is_just_released && !self.is_first_pressing {
            self.r_dir = false;
        }
        if input.is_pressed && !self.is_first_pressing && !self.r_dir {
            self.r -= 0.1;
            self.v.y += 0.3;
        }
        if input.is_just_pressed && self.is_first_pressing {
            self.is_first_pressing = false;
            con.play(SoundEffect::Jump);
            self.v.y = -3.0 * self.jump_power;
            self.jump_power *= 0.7;
        }

        if self.p.y > 99.0 {
            con.play(SoundEffect::Explosion);
            con.end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn first_frame() -> (PogoJumper, Console) {
        let mut game = PogoJumper::new();
        let mut con = Console::new(IVec2::new(100, 100), 5);
        con.begin_frame();
        game.update(&mut con);
        (game, con)
    }

    #[test]
    fn test_first_frame_resets_state() {
        let (game, _) = first_frame();
        // the starting floor sits below the view and is dropped at once
        assert!(game.floors().is_empty());
        assert!(game.pos().y > 50.0);
        assert!(game.is_first_pressing);
    }

    #[test]
    fn test_stick_rests_on_ground() {
        let mut game = PogoJumper::new();
        let mut con = Console::new(IVec2::new(100, 100), 5);
        for _ in 0..60 {
            con.begin_frame();
            game.update(&mut con);
            con.session_mut().end_frame();
        }
        let y = game.pos().y;
        assert!((95.0..97.0).contains(&y), "y = {y}");
    }
}
