//! The 16-entry palette
//!
//! Glyph patterns reference palette slots by single characters
//! (`tlrgybpcwRGYBPCW`, uppercase = dark variant).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::args::DrawError;

/// Palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Transparent,
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkPurple,
    DarkCyan,
    DarkWhite,
}

/// Pattern characters, indexed like `Color::ALL`
const COLOR_CHARS: &str = "tlrgybpcwRGYBPCW";

/// Base RGB values for black through white
const RGB_NUMBERS: [u32; 8] = [
    0x616161, 0xe91e63, 0x4caf50, 0xffeb3b, 0x3f51b5, 0x9c27b0, 0x03a9f4, 0xeeeeee,
];

impl Color {
    pub const ALL: [Color; 16] = [
        Color::Transparent,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
        Color::DarkRed,
        Color::DarkGreen,
        Color::DarkYellow,
        Color::DarkBlue,
        Color::DarkPurple,
        Color::DarkCyan,
        Color::DarkWhite,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Transparent => "transparent",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::DarkRed => "dark_red",
            Color::DarkGreen => "dark_green",
            Color::DarkYellow => "dark_yellow",
            Color::DarkBlue => "dark_blue",
            Color::DarkPurple => "dark_purple",
            Color::DarkCyan => "dark_cyan",
            Color::DarkWhite => "dark_white",
        }
    }

    /// Palette slot for a glyph pattern character (`None` for unknown chars)
    pub fn from_pattern_char(c: char) -> Option<Self> {
        COLOR_CHARS.find(c).map(|i| Self::ALL[i])
    }

    /// RGB triple, `None` for transparent
    pub fn rgb(self) -> Option<[u8; 3]> {
        let i = self.index();
        match i {
            0 => None,
            1..=8 => Some(split_rgb(RGB_NUMBERS[i - 1])),
            // Dark variants halve red through white
            _ => {
                let [r, g, b] = split_rgb(RGB_NUMBERS[i - 8]);
                Some([r / 2, g / 2, b / 2])
            }
        }
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self == Color::Transparent
    }
}

fn split_rgb(n: u32) -> [u8; 3] {
    [(n >> 16) as u8, (n >> 8) as u8, n as u8]
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DrawError::UnknownColor(s.to_string()))
    }
}

/// Set of palette colors, used for the `rect` part of a collision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorSet(u16);

impl ColorSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub fn insert(&mut self, color: Color) {
        self.0 |= 1 << color.index();
    }

    #[inline]
    pub fn contains(&self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_chars_map_to_palette_order() {
        assert_eq!(Color::from_pattern_char('t'), Some(Color::Transparent));
        assert_eq!(Color::from_pattern_char('l'), Some(Color::Black));
        assert_eq!(Color::from_pattern_char('b'), Some(Color::Blue));
        assert_eq!(Color::from_pattern_char('W'), Some(Color::DarkWhite));
        assert_eq!(Color::from_pattern_char(' '), None);
    }

    #[test]
    fn test_rgb_dark_variant_is_half() {
        assert_eq!(Color::Red.rgb(), Some([0xe9, 0x1e, 0x63]));
        assert_eq!(Color::DarkRed.rgb(), Some([0x74, 0x0f, 0x31]));
        assert_eq!(Color::Transparent.rgb(), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("dark_cyan".parse::<Color>().unwrap(), Color::DarkCyan);
        assert!(matches!("orange".parse::<Color>(), Err(DrawError::UnknownColor(_))));
    }

    #[test]
    fn test_color_set() {
        let set: ColorSet = [Color::Red, Color::Blue].into_iter().collect();
        assert!(set.contains(Color::Red));
        assert!(!set.contains(Color::Green));
        assert_eq!(set.iter().count(), 2);
    }
}
