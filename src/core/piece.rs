//! Piece identification: shapes, styles, and the pieces built from them.
//!
//! ## Shape
//!
//! One of the four piece categories. Win detection and shape exclusion
//! only ever compare shapes.
//!
//! ## Style
//!
//! The visual set a piece belongs to. Each player owns exactly one style,
//! so `Style` doubles as the player identifier.

use serde::{Deserialize, Serialize};

/// One of the four piece shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Rect,
    Circle,
    Triangle,
    Diamond,
}

impl Shape {
    /// Number of distinct shapes.
    pub const COUNT: usize = 4;

    /// All shapes in canonical order.
    pub const ALL: [Shape; Shape::COUNT] = [Shape::Rect, Shape::Circle, Shape::Triangle, Shape::Diamond];

    /// Get the 0-based index of this shape in `Shape::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter symbol used in board renderings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Shape::Rect => 'R',
            Shape::Circle => 'C',
            Shape::Triangle => 'T',
            Shape::Diamond => 'D',
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shape::Rect => "Rect",
            Shape::Circle => "Circle",
            Shape::Triangle => "Triangle",
            Shape::Diamond => "Diamond",
        };
        f.write_str(name)
    }
}

/// Piece style, identifying the owning player.
///
/// `Style::A` always moves first in a default game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    A,
    B,
}

impl Style {
    /// Both styles, in turn order of a default game.
    pub const ALL: [Style; 2] = [Style::A, Style::B];

    /// Get the opposing style.
    #[must_use]
    pub const fn opponent(self) -> Style {
        match self {
            Style::A => Style::B,
            Style::B => Style::A,
        }
    }

    /// Get the 0-based index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase letter used in board renderings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Style::A => 'a',
            Style::B => 'b',
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::A => write!(f, "Style A"),
            Style::B => write!(f, "Style B"),
        }
    }
}

/// A game piece: a shape from one player's set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub shape: Shape,
    pub style: Style,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(shape: Shape, style: Style) -> Self {
        Self { shape, style }
    }

    /// Check whether `other` is the same shape from the opposing set.
    ///
    /// This is the collision the shape-exclusion rule forbids inside a zone.
    #[must_use]
    pub fn conflicts_with(self, other: Piece) -> bool {
        self.shape == other.shape && self.style != other.style
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.shape.symbol(), self.style.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_indices_match_all() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
        }
    }

    #[test]
    fn test_style_opponent() {
        assert_eq!(Style::A.opponent(), Style::B);
        assert_eq!(Style::B.opponent(), Style::A);
        assert_eq!(Style::A.opponent().opponent(), Style::A);
    }

    #[test]
    fn test_conflicts_with() {
        let rect_a = Piece::new(Shape::Rect, Style::A);
        let rect_b = Piece::new(Shape::Rect, Style::B);
        let circle_b = Piece::new(Shape::Circle, Style::B);

        assert!(rect_a.conflicts_with(rect_b));
        assert!(rect_b.conflicts_with(rect_a));
        assert!(!rect_a.conflicts_with(rect_a)); // Same style is allowed
        assert!(!rect_a.conflicts_with(circle_b));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Piece::new(Shape::Diamond, Style::B)), "Db");
        assert_eq!(format!("{}", Shape::Triangle), "Triangle");
        assert_eq!(format!("{}", Style::A), "Style A");
    }
}
