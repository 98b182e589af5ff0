//! Game loop: the consumer contract and the scene state machine
//!
//! A game implements `Game` and only ever sees the `Console` it is handed
//! each in-game frame. `Runner` owns everything else: scenes, score and high
//! score, the HUD terminal, frame pacing and replays.

pub mod options;
pub mod replay;
pub mod runner;
pub mod session;

pub use options::{GameOptions, OptionsError, Theme, ViewSize};
pub use replay::Replay;
pub use runner::{FrameGate, Runner};
pub use session::{GameSession, Scene};

use crate::console::Console;

/// A game script driven by `Runner`
pub trait Game {
    fn title(&self) -> &str {
        ""
    }

    /// Shown on the title screen. With both title and description blank
    /// there is no title screen.
    fn description(&self) -> &str {
        ""
    }

    /// Custom character patterns, defined from `'a'` onwards
    fn characters(&self) -> &[&str] {
        &[]
    }

    fn options(&self) -> GameOptions {
        GameOptions::default()
    }

    /// One in-game frame. `con.ticks()` is 0 on the first frame of each run,
    /// which is where per-run state should be reset.
    fn update(&mut self, con: &mut Console);
}
