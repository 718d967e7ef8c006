//! Sliding piece path checks
//!
//! Common functionality for pieces that travel several squares along a line
//! (straight-line and diagonal archetypes). They may not jump: every square
//! strictly between source and destination has to be empty.

use crate::board::Board;
use crate::location::BoardLocation;

/// Check that every square strictly between `from` and `to` is empty
///
/// `from` and `to` must share a rank, file or diagonal; the walk steps one
/// square at a time in the direction of `to`.
pub(super) fn is_path_clear(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    let (dx, dy) = from.delta(to);
    let step = (dx.signum(), dy.signum());

    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceType};

    fn loc(x: i32, y: i32) -> BoardLocation {
        BoardLocation::new(x, y).unwrap()
    }

    #[test]
    fn test_adjacent_squares_have_clear_path() {
        let board = Board::empty();
        assert!(is_path_clear(&board, loc(3, 3), loc(4, 4)));
        assert!(is_path_clear(&board, loc(3, 3), loc(3, 2)));
    }

    #[test]
    fn test_destination_occupancy_is_not_part_of_path() {
        let mut board = Board::empty();
        board.place(PieceType::Pawn, Color::Black, loc(0, 7));
        assert!(is_path_clear(&board, loc(0, 0), loc(0, 7)));

        board.place(PieceType::Pawn, Color::Black, loc(0, 4));
        assert!(!is_path_clear(&board, loc(0, 0), loc(0, 7)));
    }
}
