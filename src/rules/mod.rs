//! Rule engine: placement legality, win/draw detection, turn progression.
//!
//! The presentation layer holds a `GameState` and drives it through this
//! module:
//! - `is_placement_legal` / `check_placement` to validate a candidate move
//! - `place` to apply it atomically and resolve the turn
//! - `result` / `GameState::status` to read the outcome
//!
//! Zone-level checks (`exclusion_conflicts`, `winning_zone`) are exposed
//! for callers that want to highlight why a move fails or which zone won.

pub mod checks;
pub mod engine;
pub mod error;

pub use checks::{distinct_shapes, exclusion_conflicts, is_winning_zone, winning_zone};
pub use engine::{
    check_placement, has_legal_placement, is_board_full, is_placement_legal, legal_placements, place, result,
    GameResult,
};
pub use error::IllegalPlacement;
