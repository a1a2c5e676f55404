//! Placement legality and state transitions.
//!
//! All functions are stateless: they read or update the `GameState` they
//! are given and keep nothing between calls.
//!
//! A placement is legal when, in this order:
//! 1. the cell is on the board,
//! 2. the cell is empty,
//! 3. the game is still in progress,
//! 4. the piece belongs to the player to move,
//! 5. that player still has a piece of that shape,
//! 6. no zone through the cell holds the same shape in the opposing style.

use tracing::{debug, trace};

use super::checks::{exclusion_conflicts, winning_zone};
use super::error::IllegalPlacement;
use crate::core::{GameState, GameStatus, Piece, Placement, Position, Shape, Style};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Style),
    /// Board filled with no winning zone.
    Draw,
}

impl GameResult {
    /// Check if a style won.
    #[must_use]
    pub fn is_winner(&self, style: Style) -> bool {
        matches!(self, GameResult::Winner(s) if *s == style)
    }
}

/// Validate a placement, reporting the first rule it breaks.
///
/// Returns the checked position on success. Never mutates `state`.
pub fn check_placement(
    state: &GameState,
    row: usize,
    col: usize,
    piece: Piece,
) -> Result<Position, IllegalPlacement> {
    let pos = Position::try_new(row, col).ok_or(IllegalPlacement::OutOfBounds { row, col })?;

    if !state.cell(pos).is_empty() {
        return Err(IllegalPlacement::CellOccupied(pos));
    }

    if state.is_terminal() {
        return Err(IllegalPlacement::GameOver);
    }

    let expected = state.current_turn();
    if piece.style != expected {
        return Err(IllegalPlacement::WrongTurn {
            expected,
            found: piece.style,
        });
    }

    if !state.inventory(piece.style).has(piece.shape) {
        return Err(IllegalPlacement::PieceExhausted {
            shape: piece.shape,
            style: piece.style,
        });
    }

    if let Some(&zone) = exclusion_conflicts(state.board(), pos, piece).first() {
        return Err(IllegalPlacement::ShapeConflict {
            zone,
            shape: piece.shape,
        });
    }

    Ok(pos)
}

/// Check whether a placement is legal.
#[must_use]
pub fn is_placement_legal(state: &GameState, row: usize, col: usize, piece: Piece) -> bool {
    check_placement(state, row, col, piece).is_ok()
}

/// Place a piece and resolve the turn.
///
/// On an illegal placement the state is untouched and the reason is
/// returned. Otherwise the piece is placed and the game either ends
/// (win, then draw, checked in that order) or passes to the other player.
/// Returns the resulting status.
pub fn place(
    state: &mut GameState,
    row: usize,
    col: usize,
    piece: Piece,
) -> Result<GameStatus, IllegalPlacement> {
    let position = match check_placement(state, row, col, piece) {
        Ok(pos) => pos,
        Err(reason) => {
            debug!(row, col, %piece, %reason, "placement rejected");
            return Err(reason);
        }
    };

    state.apply_placement(Placement::new(position, piece));
    trace!(%piece, %position, "piece placed");

    let mover = state.current_turn();
    if let Some(zone) = winning_zone(state.board(), position) {
        debug!(winner = %mover, %zone, "game won");
        state.set_status(GameStatus::Won(mover));
    } else if state.board().is_full() {
        debug!("board full, game drawn");
        state.set_status(GameStatus::Draw);
    } else {
        state.advance_turn();
        trace!(turn = %state.current_turn(), "turn passed");
    }

    Ok(state.status())
}

/// Check whether every cell is occupied.
#[must_use]
pub fn is_board_full(state: &GameState) -> bool {
    state.board().is_full()
}

/// Outcome of a finished game, or `None` while it is in progress.
#[must_use]
pub fn result(state: &GameState) -> Option<GameResult> {
    match state.status() {
        GameStatus::InProgress => None,
        GameStatus::Won(style) => Some(GameResult::Winner(style)),
        GameStatus::Draw => Some(GameResult::Draw),
    }
}

/// Every legal placement for the player to move.
///
/// Ordered by position (row-major), then by shape. Empty once the game
/// has ended.
#[must_use]
pub fn legal_placements(state: &GameState) -> Vec<Placement> {
    if state.is_terminal() {
        return Vec::new();
    }

    let style = state.current_turn();
    Position::all()
        .flat_map(|pos| Shape::ALL.map(|shape| Placement::new(pos, Piece::new(shape, style))))
        .filter(|p| is_placement_legal(state, p.position.row(), p.position.col(), p.piece))
        .collect()
}

/// Check whether the player to move has any legal placement.
///
/// A player can be blocked before the board fills; the game does not end
/// on its own in that case, so callers decide how to handle it.
#[must_use]
pub fn has_legal_placement(state: &GameState) -> bool {
    !state.is_terminal()
        && Position::all().any(|pos| {
            Shape::ALL.into_iter().any(|shape| {
                is_placement_legal(state, pos.row(), pos.col(), Piece::new(shape, state.current_turn()))
            })
        })
}
