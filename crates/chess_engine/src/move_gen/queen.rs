//! Queen movement
//!
//! Queens combine both sliding archetypes. [`crate::types::PieceType::movements`]
//! lists `StraightLine` and `Diagonal` for the queen, and a move is accepted if
//! either one accepts. This helper exposes the same rule as a single call.

use super::{bishop, rook};
use crate::board::Board;
use crate::location::BoardLocation;

/// Queen moves like rook or bishop
pub fn is_valid_queen_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    rook::is_valid_straight_line_move(board, from, to)
        || bishop::is_valid_diagonal_move(board, from, to)
}
