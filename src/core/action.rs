//! Placement commands.
//!
//! A placement is the only kind of move in the game: put one piece from
//! the mover's inventory on one empty cell.

use serde::{Deserialize, Serialize};

use super::board::Position;
use super::piece::{Piece, Shape, Style};

/// A piece and the cell it goes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub piece: Piece,
}

impl Placement {
    /// Create a new placement.
    #[must_use]
    pub const fn new(position: Position, piece: Piece) -> Self {
        Self { position, piece }
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.piece.shape
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.piece.style
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.piece, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_accessors() {
        let placement = Placement::new(Position::new(2, 3), Piece::new(Shape::Circle, Style::B));

        assert_eq!(placement.shape(), Shape::Circle);
        assert_eq!(placement.style(), Style::B);
        assert_eq!(placement.to_string(), "Cb at (2, 3)");
    }

    #[test]
    fn test_placement_serialization() {
        let placement = Placement::new(Position::new(0, 1), Piece::new(Shape::Rect, Style::A));
        let json = serde_json::to_string(&placement).unwrap();
        let deserialized: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(placement, deserialized);
    }
}
