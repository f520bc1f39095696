//! Session configuration: board geometry, frame pacing, and menu layout.
//!
//! Everything has a usable default; a TOML file can override any subset.

use game_core::Square;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub board: BoardGeometry,
    /// Loop iterations per second during interactive play.
    pub frame_rate: u32,
    pub menu: MenuLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board: BoardGeometry::default(),
            frame_rate: 15,
            menu: MenuLayout::default(),
        }
    }
}

impl SessionConfig {
    /// Load overrides from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

/// Pixel-to-square mapping for the playing area.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoardGeometry {
    pub square_size: u32,
    pub files: u8,
    pub ranks: u8,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        // 512x512 board, 8x8 squares
        Self {
            square_size: 64,
            files: 8,
            ranks: 8,
        }
    }
}

impl BoardGeometry {
    /// The square under a pointer position, or `None` outside the board.
    pub fn square_at(&self, x: u32, y: u32) -> Option<Square> {
        let col = x / self.square_size;
        let row = y / self.square_size;
        if col < u32::from(self.files) && row < u32::from(self.ranks) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Hit-test rectangles for the setup menus.
///
/// The first three are offered during mode selection, the last two during
/// side selection. The layouts may overlap across phases; only the current
/// phase's buttons are consulted.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuLayout {
    pub play_both: Rect,
    pub play_engine: Rect,
    pub quit: Rect,
    pub pick_white: Rect,
    pub pick_black: Rect,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            play_both: Rect::new(286, 200, 200, 50),
            play_engine: Rect::new(276, 300, 220, 50),
            quit: Rect::new(296, 400, 180, 50),
            pick_white: Rect::new(296, 200, 180, 50),
            pick_black: Rect::new(296, 300, 180, 50),
        }
    }
}
