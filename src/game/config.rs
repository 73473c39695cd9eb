use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::state::Position;

/// Glyphs used by the plain-text renderer. The defaults reproduce the
/// classic board exactly; change them here, not in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub body: char,
    pub head: char,
    pub apple: char,
    pub empty: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            body: 'O',
            head: 'X',
            apple: '*',
            empty: ' ',
        }
    }
}

/// Configuration for the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows on the board.
    pub height: i32,
    /// Number of columns on the board.
    pub width: i32,
    /// Starting snake length; clamped to the board width.
    #[serde(default = "default_snake_length")]
    pub initial_snake_length: i32,
    #[serde(default)]
    pub glyphs: Glyphs,
}

fn default_snake_length() -> i32 {
    6
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 20,
            initial_snake_length: default_snake_length(),
            glyphs: Glyphs::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size.
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            height,
            width,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// The starting body: laid out tail to head along the top row, so the
    /// head sits at the rightmost starting cell.
    pub fn initial_body(&self) -> Vec<Position> {
        let len = self.initial_snake_length.clamp(1, self.width.max(1));
        (0..len).map(|col| Position::new(0, col)).collect()
    }

    /// The starting heading. Down, away from the starting row.
    pub fn initial_direction(&self) -> Direction {
        Direction::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.height, 10);
        assert_eq!(config.width, 20);
        assert_eq!(config.initial_snake_length, 6);
        assert_eq!(config.glyphs, Glyphs::default());
    }

    #[test]
    fn test_initial_body_runs_along_top_row() {
        let config = GameConfig::default();
        let body = config.initial_body();
        assert_eq!(body.len(), 6);
        assert_eq!(body[0], Position::new(0, 0));
        assert_eq!(body[5], Position::new(0, 5));
        assert_eq!(config.initial_direction(), Direction::Down);
    }

    #[test]
    fn test_initial_body_clamped_to_narrow_board() {
        let config = GameConfig::new(10, 3);
        let body = config.initial_body();
        assert_eq!(body.len(), 3);
        assert_eq!(body.last(), Some(&Position::new(0, 2)));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig::new(5, 7);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.height, 5);
        assert_eq!(parsed.width, 7);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: GameConfig = serde_json::from_str(r#"{"height": 4, "width": 9}"#).unwrap();
        assert_eq!(parsed.initial_snake_length, 6);
        assert_eq!(parsed.glyphs, Glyphs::default());
    }
}
