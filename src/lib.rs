//! Pogo Console - a tiny pixel-art fantasy console
//!
//! Core modules:
//! - `console`: Drawing + collision facade handed to games each frame
//! - `collision`: Color-tagged hitbox registry
//! - `font`: 6x6 bitmap glyphs, variants and glyph cache
//! - `game`: Title / in-game / game over loop, options and replays
//! - `input`: Keyboard and pointer merged into one button
//! - `random`: Seedable xorshift generator
//! - `games`: The bundled example games

pub mod args;
pub mod audio;
pub mod canvas;
pub mod collision;
pub mod color;
pub mod console;
pub mod font;
pub mod game;
pub mod games;
pub mod geom;
pub mod input;
pub mod random;
pub mod terminal;

pub use args::{Arg, DrawError};
pub use collision::{Collision, HitBox, HitBoxRegistry};
pub use color::Color;
pub use console::Console;
pub use game::{Game, GameOptions, Replay, Runner, Scene};
pub use geom::{Vector, vec};
pub use random::Random;

/// Console configuration constants
pub mod consts {
    /// Glyph cell edge in pixels
    pub const LETTER_SIZE: i32 = 6;

    /// Frame pacing: animation callbacks closer than 1000 / fps - slack ms apart are dropped
    pub const TARGET_FPS: u32 = 60;
    pub const FRAME_SLACK_MS: f64 = 5.0;

    /// Difficulty grows by 1 every this many ticks
    pub const DIFFICULTY_TICKS: i32 = 3600;

    /// Game over ignores presses until this tick
    pub const GAME_OVER_GRACE_TICKS: i32 = 20;
    pub const GAME_OVER_REDRAW_TICK: i32 = 10;
    /// Back to the title after this many idle game over ticks
    pub const GAME_OVER_TITLE_TIMEOUT: i32 = 500;
    /// Title ticks on which the description is (re)printed
    pub const DESCRIPTION_TICKS: [i32; 2] = [30, 40];

    /// Frames before glyph variants start being cached
    pub const CACHE_WARMUP_FRAMES: u32 = 10;

    /// Line segment square size bounds
    pub const LINE_THICKNESS_MIN: f32 = 3.0;
    pub const LINE_THICKNESS_MAX: f32 = 10.0;
    /// Bounds on squares sampled along a line
    pub const LINE_SAMPLES_MIN: u32 = 3;
    pub const LINE_SAMPLES_MAX: u32 = 99;
}
