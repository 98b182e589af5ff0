//! Scene, frame counter and score bookkeeping

use serde::{Deserialize, Serialize};

use crate::consts::DIFFICULTY_TICKS;

/// Which screen the runner is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scene {
    #[default]
    Title,
    InGame,
    GameOver,
}

/// Per-page game state; lives as long as the runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub scene: Scene,
    /// -1 right after entering a scene, 0 on its first frame
    pub ticks: i32,
    pub score: f32,
    pub hi_score: u32,
    pub difficulty: f32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            scene: Scene::Title,
            ticks: 0,
            score: 0.0,
            hi_score: 0,
            difficulty: 1.0,
        }
    }

    /// `ticks / 3600 + 1`
    #[inline]
    pub fn difficulty_at(ticks: i32) -> f32 {
        ticks as f32 / DIFFICULTY_TICKS as f32 + 1.0
    }

    /// Switch scene and rewind the frame counter to the pre-first-frame value
    pub fn enter(&mut self, scene: Scene) {
        self.scene = scene;
        self.ticks = -1;
    }

    /// Enter `InGame`: bank the previous score into the high score and reset it.
    /// Returns true when the high score went up.
    pub fn start_run(&mut self) -> bool {
        self.enter(Scene::InGame);
        let banked = self.score.floor().max(0.0) as u32;
        self.score = 0.0;
        if banked > self.hi_score {
            self.hi_score = banked;
            return true;
        }
        false
    }

    pub fn begin_frame(&mut self) {
        self.difficulty = Self::difficulty_at(self.ticks);
    }

    pub fn end_frame(&mut self) {
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_boundaries() {
        assert_eq!(GameSession::difficulty_at(0), 1.0);
        assert_eq!(GameSession::difficulty_at(3600), 2.0);
        assert_eq!(GameSession::difficulty_at(7200), 3.0);
        assert_eq!(GameSession::difficulty_at(1800), 1.5);
    }

    #[test]
    fn test_start_run_banks_floor_of_score() {
        let mut s = GameSession::new();
        s.score = 12.9;
        assert!(s.start_run());
        assert_eq!(s.hi_score, 12);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.ticks, -1);
        assert_eq!(s.scene, Scene::InGame);

        s.score = 5.0;
        assert!(!s.start_run());
        assert_eq!(s.hi_score, 12);
    }

    #[test]
    fn test_first_frame_sees_zero() {
        let mut s = GameSession::new();
        s.enter(Scene::GameOver);
        s.end_frame();
        assert_eq!(s.ticks, 0);
    }
}
