//! Unit-cell colours.
//!
//! A colour is an opaque RGB triple compared by equality only. The game ships
//! a fixed four-colour palette; each palette entry has a one-letter code used
//! by the grid notation and the command protocol.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An RGB colour. Serializes as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

pub const PACIFIC_POINT: Color = Color(1, 128, 181);
pub const REAL_RED: Color = Color(199, 44, 58);
pub const OLD_OLIVE: Color = Color(138, 151, 71);
pub const DAFFY_DUCK_YELLOW: Color = Color(255, 211, 92);

/// The game's colours, in palette order.
pub const PALETTE: [Color; 4] = [PACIFIC_POINT, REAL_RED, OLD_OLIVE, DAFFY_DUCK_YELLOW];

/// Number of colours in the palette.
pub const PALETTE_SIZE: usize = PALETTE.len();

const PALETTE_CODES: [char; PALETTE_SIZE] = ['b', 'r', 'o', 'y'];
const PALETTE_NAMES: [&str; PALETTE_SIZE] =
    ["pacific_point", "real_red", "old_olive", "daffy_duck_yellow"];

/// Errors that can occur when parsing a colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("empty colour")]
    Empty,

    #[error("unknown palette colour: '{0}'")]
    UnknownName(String),

    #[error("expected 3 comma-separated components, got {0}")]
    WrongComponentCount(usize),

    #[error("invalid colour component: '{0}'")]
    InvalidComponent(String),
}

impl Color {
    fn palette_index(self) -> Option<usize> {
        PALETTE.iter().position(|&c| c == self)
    }

    /// Returns the one-letter palette code, or None for off-palette colours.
    pub fn code(self) -> Option<char> {
        self.palette_index().map(|i| PALETTE_CODES[i])
    }

    /// Returns the palette name, or None for off-palette colours.
    pub fn name(self) -> Option<&'static str> {
        self.palette_index().map(|i| PALETTE_NAMES[i])
    }

    /// Looks up a palette colour by its one-letter code.
    pub fn from_code(c: char) -> Option<Color> {
        PALETTE_CODES
            .iter()
            .position(|&code| code == c)
            .map(|i| PALETTE[i])
    }

    /// Looks up a palette colour by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Color> {
        PALETTE_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| PALETTE[i])
    }
}

impl fmt::Display for Color {
    /// Palette colours print as their name, others as `r,g,b`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{},{},{}", self.0, self.1, self.2),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts a palette code (`y`), a palette name (`daffy_duck_yellow`),
    /// or a decimal triple (`255,211,92`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }

        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').collect();
            if parts.len() != 3 {
                return Err(ColorError::WrongComponentCount(parts.len()));
            }
            let mut rgb = [0u8; 3];
            for (slot, part) in rgb.iter_mut().zip(&parts) {
                *slot = part
                    .trim()
                    .parse()
                    .map_err(|_| ColorError::InvalidComponent(part.trim().to_string()))?;
            }
            return Ok(Color(rgb[0], rgb[1], rgb[2]));
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(color) = Color::from_code(c) {
                return Ok(color);
            }
        }

        Color::from_name(s).ok_or_else(|| ColorError::UnknownName(s.to_string()))
    }
}
