//! JUJUMP
//!
//! Hop between falling platforms, switching direction on every jump. Each
//! jump in the air is weaker than the last until the square lands again.

use super::MAX_PUSH_OUT;
use crate::audio::SoundEffect;
use crate::color::Color;
use crate::console::Console;
use crate::game::{Game, GameOptions};
use crate::geom::{Vector, vec};

const FLOOR_WIDTH: f32 = 33.0;
const FLOOR_HEIGHT: f32 = 7.0;
const PLAYER_SIZE: f32 = 7.0;

#[derive(Debug, Clone, Default)]
pub struct Jujump {
    p: Vector,
    v: Vector,
    floors: Vec<Vector>,
    /// Horizontal direction of the next jump, +1 or -1
    jump_way: f32,
    jump_power: f32,
    floor_app_dist: f32,
}

impl Jujump {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        *self = Self {
            p: vec(50.0, 50.0),
            v: Vector::ZERO,
            floors: vec![vec(50.0, 70.0)],
            jump_way: 1.0,
            jump_power: 1.0,
            floor_app_dist: 1.0,
        };
    }

    pub fn pos(&self) -> Vector {
        self.p
    }

    pub fn floors(&self) -> &[Vector] {
        &self.floors
    }
}

impl Game for Jujump {
    fn title(&self) -> &str {
        "JUJUMP"
    }

    fn description(&self) -> &str {
        "\n[Press] Jump\n"
    }

    fn options(&self) -> GameOptions {
        GameOptions {
            is_playing_bgm: true,
            is_replay_enabled: true,
            ..GameOptions::default()
        }
    }

    fn update(&mut self, con: &mut Console) {
        if con.ticks() == 0 {
            self.reset();
        }
        self.p.add(self.v);
        self.v.y += if con.input().is_pressed() { 0.05 } else { 0.1 };
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

        con.color(Color::Blue);
        self.floors.retain_mut(|f| {
            f.y += scr;
            con.box_(*f, FLOOR_WIDTH, FLOOR_HEIGHT);
            f.y < 99.0
        });

        con.color(Color::Transparent);
        for _ in 0..MAX_PUSH_OUT {
            if !con.box_(self.p, PLAYER_SIZE, PLAYER_SIZE).rect.contains(Color::Blue) {
                break;
            }
            self.p.y -= 1.0;
            self.v.set_xy(0.0, 0.0);
            self.jump_power = 1.0;
        }

        con.color(Color::Green);
        con.box_(self.p, PLAYER_SIZE, PLAYER_SIZE);

        if con.input().is_just_pressed() {
            con.play(SoundEffect::Jump);
            self.jump_way = -self.jump_way;
            self.v.x = self.jump_way;
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

    fn run(game: &mut Jujump, con: &mut Console, frames: usize) {
        for _ in 0..frames {
            con.begin_frame();
            game.update(con);
            con.session_mut().end_frame();
        }
    }

    #[test]
    fn test_lands_on_first_floor() {
        let mut game = Jujump::new();
        let mut con = Console::new(IVec2::new(100, 100), 9);
        run(&mut game, &mut con, 60);

        let floor = game.floors()[0];
        let p = game.pos();
        // resting on top: player box bottom meets the floor box top
        assert!(p.y < floor.y - 6.0, "p = {p:?}, floor = {floor:?}");
        assert!(p.y > floor.y - 10.0, "p = {p:?}, floor = {floor:?}");
        assert_eq!(p.x, 50.0);
    }

    #[test]
    fn test_jump_alternates_direction_and_weakens() {
        let mut game = Jujump::new();
        let mut con = Console::new(IVec2::new(100, 100), 9);
        run(&mut game, &mut con, 1);

        con.input_mut().keyboard.on_key_down();
        con.input_mut().update();
        run(&mut game, &mut con, 1);
        assert_eq!(game.v.x, -1.0);
        assert_eq!(game.v.y, -3.0);

        con.input_mut().keyboard.on_key_up();
        con.input_mut().update();
        run(&mut game, &mut con, 1);
        con.input_mut().keyboard.on_key_down();
        con.input_mut().update();
        run(&mut game, &mut con, 1);
        assert_eq!(game.v.x, 1.0);
        assert!((game.v.y + 2.1).abs() < 1e-5);
    }
}
