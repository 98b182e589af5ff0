//! Per-game options
//!
//! Games declare these statically; hosts may also load them from JSON.
//! Every field has a default and unknown keys are ignored.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid options json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    #[default]
    Simple,
    Pixel,
    Shape,
    ShapeDark,
    Crt,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::ShapeDark | Theme::Crt | Theme::Dark)
    }

    /// View background shown through transparent pixels
    pub fn background_rgb(&self) -> [u8; 3] {
        if self.is_dark() {
            [0x10, 0x10, 0x10]
        } else {
            [0xee, 0xee, 0xee]
        }
    }
}

/// View size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSize {
    pub x: i32,
    pub y: i32,
}

impl Default for ViewSize {
    fn default() -> Self {
        Self { x: 100, y: 100 }
    }
}

impl ViewSize {
    pub fn as_ivec2(&self) -> IVec2 {
        IVec2::new(self.x, self.y).max(IVec2::ONE)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameOptions {
    /// Background music while in game
    pub is_playing_bgm: bool,
    /// Record each run's seed and input so it can be played back
    pub is_replay_enabled: bool,
    pub theme: Theme,
    /// Added to the description hash to form the session seed
    pub seed: u32,
    pub view_size: ViewSize,
}

impl GameOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = GameOptions::default();
        assert!(!o.is_playing_bgm);
        assert!(!o.is_replay_enabled);
        assert_eq!(o.theme, Theme::Simple);
        assert_eq!(o.view_size.as_ivec2(), IVec2::new(100, 100));
    }

    #[test]
    fn test_json_camel_case_and_unknown_keys() {
        let o = GameOptions::from_json(
            r#"{"isPlayingBgm": true, "theme": "shapeDark", "isCapturing": true, "viewSize": {"x": 120, "y": 80}}"#,
        )
        .unwrap();
        assert!(o.is_playing_bgm);
        assert_eq!(o.theme, Theme::ShapeDark);
        assert!(o.theme.is_dark());
        assert_eq!(o.view_size, ViewSize { x: 120, y: 80 });
        assert_eq!(o.seed, 0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(GameOptions::from_json(r#"{"theme": "neon"}"#).is_err());
        assert!(GameOptions::from_json("not json").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let o = GameOptions {
            is_replay_enabled: true,
            theme: Theme::Crt,
            seed: 9,
            ..GameOptions::default()
        };
        let back = GameOptions::from_json(&o.to_json().unwrap()).unwrap();
        assert_eq!(back, o);
    }
}
