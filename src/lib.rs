//! # quantik-engine
//!
//! Rule engine for Quantik, a two-player placement game on a 4×4 grid.
//!
//! ## The Game
//!
//! Each player owns a set of pieces in their own style: two each of
//! Rect, Circle, Triangle and Diamond. Players alternate placing one
//! piece on an empty cell.
//!
//! - **Shape exclusion**: a piece may not share a row, column, or 2×2
//!   region with a piece of the same shape from the opposing set.
//! - **Win**: the player who completes a row, column, or region holding
//!   all four shapes (any mix of styles) wins at once.
//! - **Draw**: the board fills without a winning zone.
//!
//! ## Architecture
//!
//! - **Pure logic**: no I/O, no threads. Rendering and input belong to
//!   the caller, which holds a `GameState` and sends it discrete commands.
//!
//! - **Values, not exceptions**: illegal moves come back as
//!   `IllegalPlacement`; broken engine invariants panic.
//!
//! ## Modules
//!
//! - `core`: Pieces, styles, board, inventories, configuration, state
//! - `zones`: Rows, columns and regions, extracted once for every check
//! - `rules`: Legality, placement, and win/draw detection
//!
//! ## Example
//!
//! ```
//! use quantik_engine::{place, GameState, GameStatus, Piece, Shape, Style};
//!
//! let mut state = GameState::new();
//! let status = place(&mut state, 0, 0, Piece::new(Shape::Rect, Style::A)).unwrap();
//!
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(state.current_turn(), Style::B);
//!
//! // Same shape, opposing style, same row
//! assert!(place(&mut state, 0, 3, Piece::new(Shape::Rect, Style::B)).is_err());
//! ```

pub mod core;
pub mod zones;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, ConfigError, GameConfig, GameState, GameStatus, Inventory, Piece, Placement, Position, Region,
    Shape, Style, StyleMap,
};

pub use crate::zones::Zone;

pub use crate::rules::{
    check_placement, has_legal_placement, is_board_full, is_placement_legal, legal_placements, place, result,
    GameResult, IllegalPlacement,
};
