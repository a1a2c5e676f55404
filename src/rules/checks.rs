//! Zone-level rule checks shared by legality and termination.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Board, Piece, Position, Shape};
use crate::zones::Zone;

/// Zones through `pos` that already hold `piece`'s shape in the opposing
/// style.
///
/// Row, column and region are checked independently; the result lists
/// every violated zone in that order. Same-style duplicates are allowed.
#[must_use]
pub fn exclusion_conflicts(board: &Board, pos: Position, piece: Piece) -> SmallVec<[Zone; 3]> {
    Zone::through(pos)
        .into_iter()
        .filter(|zone| zone.pieces(board).any(|other| piece.conflicts_with(other)))
        .collect()
}

/// Distinct shapes among the occupied cells of a zone.
#[must_use]
pub fn distinct_shapes(board: &Board, zone: Zone) -> FxHashSet<Shape> {
    zone.pieces(board).map(|p| p.shape).collect()
}

/// Check whether a zone shows all four shapes.
///
/// Zones have exactly four cells, so this also means the zone is full.
#[must_use]
pub fn is_winning_zone(board: &Board, zone: Zone) -> bool {
    distinct_shapes(board, zone).len() == Shape::COUNT
}

/// First zone through `pos` (row, column, region) that shows all four
/// shapes.
///
/// Only zones touching `pos` are inspected: a placement can only complete
/// a zone it belongs to.
#[must_use]
pub fn winning_zone(board: &Board, pos: Position) -> Option<Zone> {
    Zone::through(pos)
        .into_iter()
        .find(|&zone| is_winning_zone(board, zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Region, Style};

    fn put(board: &mut Board, row: usize, col: usize, shape: Shape, style: Style) {
        board.place(Position::new(row, col), Piece::new(shape, style));
    }

    #[test]
    fn test_no_conflicts_on_empty_board() {
        let board = Board::new();
        let piece = Piece::new(Shape::Rect, Style::A);
        assert!(exclusion_conflicts(&board, Position::new(2, 2), piece).is_empty());
    }

    #[test]
    fn test_conflicts_reported_per_zone() {
        let mut board = Board::new();
        put(&mut board, 0, 3, Shape::Rect, Style::B); // row 0
        put(&mut board, 3, 0, Shape::Rect, Style::B); // column 0
        put(&mut board, 1, 1, Shape::Rect, Style::B); // top-left region

        let piece = Piece::new(Shape::Rect, Style::A);
        let conflicts = exclusion_conflicts(&board, Position::new(0, 0), piece);

        assert_eq!(
            conflicts.as_slice(),
            &[Zone::Row(0), Zone::Column(0), Zone::Region(Region::TopLeft)]
        );
    }

    #[test]
    fn test_region_only_conflict() {
        let mut board = Board::new();
        put(&mut board, 3, 3, Shape::Triangle, Style::A);

        // (2, 2) shares only the region with (3, 3)
        let piece = Piece::new(Shape::Triangle, Style::B);
        let conflicts = exclusion_conflicts(&board, Position::new(2, 2), piece);
        assert_eq!(conflicts.as_slice(), &[Zone::Region(Region::BottomRight)]);
    }

    #[test]
    fn test_same_style_and_other_shapes_allowed() {
        let mut board = Board::new();
        put(&mut board, 0, 1, Shape::Circle, Style::A);
        put(&mut board, 0, 2, Shape::Rect, Style::B);

        let conflicts = exclusion_conflicts(&board, Position::new(0, 0), Piece::new(Shape::Circle, Style::A));
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_winning_zone_mixed_styles() {
        let mut board = Board::new();
        put(&mut board, 2, 0, Shape::Rect, Style::A);
        put(&mut board, 2, 1, Shape::Circle, Style::B);
        put(&mut board, 2, 2, Shape::Triangle, Style::A);
        assert_eq!(winning_zone(&board, Position::new(2, 2)), None);

        put(&mut board, 2, 3, Shape::Diamond, Style::B);
        assert_eq!(winning_zone(&board, Position::new(2, 3)), Some(Zone::Row(2)));
    }

    #[test]
    fn test_repeated_shape_is_not_a_win() {
        let mut board = Board::new();
        put(&mut board, 0, 0, Shape::Rect, Style::A);
        put(&mut board, 1, 0, Shape::Rect, Style::A);
        put(&mut board, 2, 0, Shape::Circle, Style::B);
        put(&mut board, 3, 0, Shape::Triangle, Style::B);

        assert_eq!(distinct_shapes(&board, Zone::Column(0)).len(), 3);
        assert!(!is_winning_zone(&board, Zone::Column(0)));
    }

    #[test]
    fn test_win_detection_is_local() {
        let mut board = Board::new();
        // Complete row 0
        put(&mut board, 0, 0, Shape::Rect, Style::A);
        put(&mut board, 0, 1, Shape::Circle, Style::B);
        put(&mut board, 0, 2, Shape::Triangle, Style::A);
        put(&mut board, 0, 3, Shape::Diamond, Style::B);
        // Unrelated move far away
        put(&mut board, 3, 3, Shape::Rect, Style::B);

        assert!(is_winning_zone(&board, Zone::Row(0)));
        assert_eq!(winning_zone(&board, Position::new(3, 3)), None);
    }
}
