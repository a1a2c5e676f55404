//! Reasons a placement can be rejected.

use thiserror::Error;

use crate::core::{Position, Shape, Style};
use crate::zones::Zone;

/// Why a placement was refused.
///
/// These are ordinary game outcomes, reported so the caller can re-prompt
/// the player. A rejected placement never changes the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalPlacement {
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("the game is over")]
    GameOver,

    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Style, found: Style },

    #[error("no {shape} pieces left for {style}")]
    PieceExhausted { shape: Shape, style: Style },

    #[error("{zone} already holds an opposing {shape}")]
    ShapeConflict { zone: Zone, shape: Shape },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Region;

    #[test]
    fn test_illegal_placement_display() {
        assert_eq!(
            IllegalPlacement::OutOfBounds { row: 4, col: 1 }.to_string(),
            "cell (4, 1) is off the board"
        );
        assert_eq!(
            IllegalPlacement::WrongTurn {
                expected: Style::A,
                found: Style::B
            }
            .to_string(),
            "it is Style A's turn, not Style B's"
        );
        assert_eq!(
            IllegalPlacement::PieceExhausted {
                shape: Shape::Circle,
                style: Style::B
            }
            .to_string(),
            "no Circle pieces left for Style B"
        );
        assert_eq!(
            IllegalPlacement::ShapeConflict {
                zone: Zone::Region(Region::BottomRight),
                shape: Shape::Rect
            }
            .to_string(),
            "BottomRight region already holds an opposing Rect"
        );
    }
}
