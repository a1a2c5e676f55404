//! Game configuration.
//!
//! The standard game uses two pieces of each shape per player and lets
//! `Style::A` move first. `GameConfig` carries those parameters so a fresh
//! state (and every reset of it) is built from one place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::CELL_COUNT;
use super::piece::{Shape, Style};

/// Errors from `GameConfig::validate`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pieces_per_shape must be between 1 and {max}, got {found}")]
    PiecesPerShape { found: u8, max: u8 },
}

/// Start-of-game parameters.
///
/// Deserialization runs `validate`, so a stored config that would panic on
/// state construction is rejected up front.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Pieces of each shape in every player's starting inventory.
    pub pieces_per_shape: u8,

    /// Style that moves first.
    pub first_turn: Style,
}

/// Unvalidated wire form of `GameConfig`.
#[derive(Deserialize)]
struct RawGameConfig {
    pieces_per_shape: u8,
    first_turn: Style,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        let config = Self {
            pieces_per_shape: raw.pieces_per_shape,
            first_turn: raw.first_turn,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pieces_per_shape: 2,
            first_turn: Style::A,
        }
    }
}

impl GameConfig {
    /// Largest piece count for which one player's inventory still fits on
    /// the board.
    pub const MAX_PIECES_PER_SHAPE: u8 = (CELL_COUNT / Shape::COUNT) as u8;

    /// Set the number of pieces per shape.
    #[must_use]
    pub fn with_pieces_per_shape(mut self, count: u8) -> Self {
        self.pieces_per_shape = count;
        self
    }

    /// Set the style that moves first.
    #[must_use]
    pub fn with_first_turn(mut self, style: Style) -> Self {
        self.first_turn = style;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pieces_per_shape == 0 || self.pieces_per_shape > Self::MAX_PIECES_PER_SHAPE {
            return Err(ConfigError::PiecesPerShape {
                found: self.pieces_per_shape,
                max: Self::MAX_PIECES_PER_SHAPE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.pieces_per_shape, 2);
        assert_eq!(config.first_turn, Style::A);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_pieces_per_shape(1)
            .with_first_turn(Style::B);

        assert_eq!(config.pieces_per_shape, 1);
        assert_eq!(config.first_turn, Style::B);
    }

    #[test]
    fn test_validate_rejects_bad_counts() {
        let err = GameConfig::default().with_pieces_per_shape(0).validate().unwrap_err();
        assert_eq!(err, ConfigError::PiecesPerShape { found: 0, max: 4 });
        assert_eq!(err.to_string(), "pieces_per_shape must be between 1 and 4, got 0");

        assert!(GameConfig::default().with_pieces_per_shape(5).validate().is_err());
        assert!(GameConfig::default().with_pieces_per_shape(4).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_first_turn(Style::B);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_invalid_config() {
        let err = serde_json::from_str::<GameConfig>(r#"{"pieces_per_shape":0,"first_turn":"A"}"#).unwrap_err();
        assert!(err.to_string().contains("pieces_per_shape must be between 1 and 4, got 0"));

        assert!(serde_json::from_str::<GameConfig>(r#"{"pieces_per_shape":5,"first_turn":"B"}"#).is_err());
    }
}
