//! Recorded runs
//!
//! A run is fully determined by the RNG seed it started with and the unified
//! input of each of its frames.

use serde::{Deserialize, Serialize};

use crate::input::InputSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub seed: u32,
    /// One entry per in-game frame
    pub inputs: Vec<InputSnapshot>,
}

impl Replay {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            inputs: Vec::new(),
        }
    }

    pub fn record(&mut self, snapshot: InputSnapshot) {
        self.inputs.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Cursor over a replay being played back
#[derive(Debug, Clone)]
pub(crate) struct Playback {
    replay: Replay,
    cursor: usize,
}

impl Playback {
    pub(crate) fn new(replay: Replay) -> Self {
        Self { replay, cursor: 0 }
    }

    pub(crate) fn seed(&self) -> u32 {
        self.replay.seed
    }

    /// Next frame's input; idle once the recording runs out
    pub(crate) fn next_input(&mut self) -> InputSnapshot {
        let snapshot = self
            .replay
            .inputs
            .get(self.cursor)
            .copied()
            .unwrap_or_default();
        self.cursor += 1;
        snapshot
    }
}
