//! Core game types: pieces, styles, board, inventories, configuration, state.
//!
//! Everything here is plain data. Legality and turn progression live in
//! `rules`; this module only guards structural invariants (a cell is
//! occupied at most once, inventories never go negative).

pub mod piece;
pub mod player;
pub mod inventory;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use piece::{Piece, Shape, Style};
pub use player::StyleMap;
pub use inventory::Inventory;
pub use board::{Board, Cell, Position, Region, BOARD_SIZE, CELL_COUNT};
pub use config::{ConfigError, GameConfig};
pub use action::Placement;
pub use state::{GameState, GameStatus};
