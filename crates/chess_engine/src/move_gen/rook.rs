//! Straight-line movement
//!
//! The rook's archetype, also half of the queen's.
//!
//! ## Straight-Line Movement Rules
//!
//! - Moves along its rank or its file, any distance
//! - Cannot jump over pieces, friendly or opposing
//! - Lands on an empty square or captures an opposing piece

use super::sliding::is_path_clear;
use crate::board::Board;
use crate::location::BoardLocation;

/// Check the straight-line geometry and path from `from` to `to`
///
/// Destination occupancy is checked by the caller ([`super::Movement::can_move`]).
pub fn is_valid_straight_line_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    // Must move horizontally or vertically
    if from.x() != to.x() && from.y() != to.y() {
        return false;
    }

    is_path_clear(board, from, to)
}
