//! Game state: board, inventories, turn, and terminal status.
//!
//! ## Lifecycle
//!
//! - Fresh (from `new`, `with_config`, or `reset`): empty board, full
//!   inventories, first player to move, in progress.
//! - Each legal placement goes through `rules::place`, which is the only
//!   caller of the crate-internal mutators below.
//! - Once `Won` or `Draw`, the state only changes again through `reset`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::Placement;
use super::board::{Board, Cell, Position};
use super::config::GameConfig;
use super::inventory::Inventory;
use super::piece::Style;
use super::player::StyleMap;

/// Progress of a single game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// The style completed a zone with all four shapes.
    Won(Style),
    /// Board filled without a winning zone.
    Draw,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning style, if the game was won.
    #[must_use]
    pub const fn winner(self) -> Option<Style> {
        match self {
            GameStatus::Won(style) => Some(style),
            _ => None,
        }
    }
}

/// Complete state of one game session.
///
/// Callers read it through accessors and change it only through
/// `rules::place` and `reset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    inventories: StyleMap<Inventory>,
    turn: Style,
    status: GameStatus,
}

impl GameState {
    /// Create a standard game: two pieces per shape, `Style::A` first.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a game from a custom configuration.
    ///
    /// Panics if the configuration does not validate.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("Invalid game configuration: {}", err);
        }

        Self {
            board: Board::new(),
            inventories: StyleMap::with_value(Inventory::full(config.pieces_per_shape)),
            turn: config.first_turn,
            status: GameStatus::InProgress,
            config,
        }
    }

    /// Discard all progress and return to the fresh state for this config.
    pub fn reset(&mut self) {
        debug!(previous = ?self.status, placed = self.placed_count(), "resetting game");
        *self = Self::with_config(self.config.clone());
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Contents of a single cell.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    /// Remaining pieces for one style.
    #[must_use]
    pub fn inventory(&self, style: Style) -> &Inventory {
        &self.inventories[style]
    }

    #[must_use]
    pub fn inventories(&self) -> &StyleMap<Inventory> {
        &self.inventories
    }

    /// Style whose turn it is. After the game ends this is the style that
    /// made the final placement.
    #[must_use]
    pub fn current_turn(&self) -> Style {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winner of a finished game; `None` while in progress or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Style> {
        self.status.winner()
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.board.occupied_count()
    }

    // === Rule-engine mutators ===

    /// Put a validated piece on the board and take it from its owner's
    /// inventory.
    ///
    /// Does not advance the turn or evaluate termination. Panics if the
    /// cell is occupied or the inventory is exhausted.
    pub(crate) fn apply_placement(&mut self, placement: Placement) {
        let Placement { position, piece } = placement;
        self.inventories[piece.style].take(piece.shape);
        self.board.place(position, piece);
    }

    /// Pass the turn to the other style.
    pub(crate) fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Record a terminal outcome.
    ///
    /// Panics if the game has already ended.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        assert!(
            !self.status.is_terminal(),
            "Game already ended with {:?}",
            self.status
        );
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
