//! Zone definitions and extraction.
//!
//! A zone is any group of four cells checked together: a row, a column,
//! or a 2×2 region. Shape exclusion and win detection both read zones
//! through `Zone::snapshot`, so the two checks always agree on which
//! cells belong together.

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, Cell, Position, Region, BOARD_SIZE};
use crate::core::piece::Piece;

/// Number of cells in every zone.
pub const ZONE_SIZE: usize = 4;

/// A row, column, or region of the board.
///
/// Row and column indices are in `0..BOARD_SIZE`; off-board indices fail
/// to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawZone")]
pub enum Zone {
    Row(u8),
    Column(u8),
    Region(Region),
}

/// Unvalidated wire form of `Zone`.
#[derive(Deserialize)]
enum RawZone {
    Row(u8),
    Column(u8),
    Region(Region),
}

impl TryFrom<RawZone> for Zone {
    type Error = String;

    fn try_from(raw: RawZone) -> Result<Self, Self::Error> {
        match raw {
            RawZone::Row(r) if usize::from(r) < BOARD_SIZE => Ok(Zone::Row(r)),
            RawZone::Column(c) if usize::from(c) < BOARD_SIZE => Ok(Zone::Column(c)),
            RawZone::Region(region) => Ok(Zone::Region(region)),
            RawZone::Row(i) | RawZone::Column(i) => Err(format!("zone index {} is off the board", i)),
        }
    }
}

impl Zone {
    /// The three zones containing `pos`, in order row, column, region.
    #[must_use]
    pub fn through(pos: Position) -> [Zone; 3] {
        [
            Zone::Row(pos.row() as u8),
            Zone::Column(pos.col() as u8),
            Zone::Region(pos.region()),
        ]
    }

    /// All twelve zones: rows, then columns, then regions.
    pub fn all() -> impl Iterator<Item = Zone> {
        let rows = (0..BOARD_SIZE as u8).map(Zone::Row);
        let cols = (0..BOARD_SIZE as u8).map(Zone::Column);
        let regions = Region::ALL.into_iter().map(Zone::Region);
        rows.chain(cols).chain(regions)
    }

    /// Positions covered by this zone.
    ///
    /// Rows run left to right, columns top to bottom, regions in
    /// reading order.
    #[must_use]
    pub fn cells(self) -> [Position; ZONE_SIZE] {
        match self {
            Zone::Row(r) => std::array::from_fn(|i| Position::new(r as usize, i)),
            Zone::Column(c) => std::array::from_fn(|i| Position::new(i, c as usize)),
            Zone::Region(region) => {
                let (r0, c0) = region.origin();
                std::array::from_fn(|i| Position::new(r0 + i / 2, c0 + i % 2))
            }
        }
    }

    /// Check whether `pos` lies in this zone.
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        match self {
            Zone::Row(r) => pos.row() == r as usize,
            Zone::Column(c) => pos.col() == c as usize,
            Zone::Region(region) => pos.region() == region,
        }
    }

    /// Read-only copy of this zone's cells.
    #[must_use]
    pub fn snapshot(self, board: &Board) -> [Cell; ZONE_SIZE] {
        self.cells().map(|pos| board.get(pos))
    }

    /// Pieces currently in this zone.
    pub fn pieces(self, board: &Board) -> impl Iterator<Item = Piece> {
        self.snapshot(board).into_iter().filter_map(Cell::piece)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Row(r) => write!(f, "row {}", r),
            Zone::Column(c) => write!(f, "column {}", c),
            Zone::Region(region) => write!(f, "{:?} region", region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::{Shape, Style};

    #[test]
    fn test_through_order() {
        let zones = Zone::through(Position::new(1, 2));
        assert_eq!(
            zones,
            [Zone::Row(1), Zone::Column(2), Zone::Region(Region::TopRight)]
        );
    }

    #[test]
    fn test_all_zones() {
        let zones: Vec<_> = Zone::all().collect();
        assert_eq!(zones.len(), 12);

        // Every cell lies in exactly three zones
        for pos in Position::all() {
            assert_eq!(zones.iter().filter(|z| z.contains(pos)).count(), 3);
        }
    }

    #[test]
    fn test_cells_match_contains() {
        for zone in Zone::all() {
            let cells = zone.cells();
            for pos in Position::all() {
                assert_eq!(cells.contains(&pos), zone.contains(pos), "{} / {}", zone, pos);
            }
        }
    }

    #[test]
    fn test_region_cells() {
        let cells = Zone::Region(Region::BottomLeft).cells();
        assert_eq!(
            cells,
            [
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(3, 0),
                Position::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_snapshot_and_pieces() {
        let mut board = Board::new();
        let rect = Piece::new(Shape::Rect, Style::A);
        let diamond = Piece::new(Shape::Diamond, Style::B);
        board.place(Position::new(0, 3), rect);
        board.place(Position::new(3, 3), diamond);

        let column = Zone::Column(3).snapshot(&board);
        assert_eq!(column[0], Cell::Occupied(rect));
        assert_eq!(column[1], Cell::Empty);
        assert_eq!(column[3], Cell::Occupied(diamond));

        let pieces: Vec<_> = Zone::Column(3).pieces(&board).collect();
        assert_eq!(pieces, vec![rect, diamond]);
        assert_eq!(Zone::Row(1).pieces(&board).count(), 0);
    }

    #[test]
    fn test_serde_rejects_off_board_index() {
        for zone in Zone::all() {
            let json = serde_json::to_string(&zone).unwrap();
            assert_eq!(serde_json::from_str::<Zone>(&json).unwrap(), zone);
        }

        assert!(serde_json::from_str::<Zone>(r#"{"Row":9}"#).is_err());
        assert!(serde_json::from_str::<Zone>(r#"{"Column":4}"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Zone::Row(2).to_string(), "row 2");
        assert_eq!(Zone::Column(0).to_string(), "column 0");
        assert_eq!(Zone::Region(Region::TopLeft).to_string(), "TopLeft region");
    }
}
