//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in
//! check. This is the predicate behind three rules:
//!
//! - A move may not leave the mover's own king attacked
//! - Castling may not start from, pass through or land on an attacked square
//! - Game state classification (check, checkmate, stalemate)
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through all opponent pieces and
//! ask each one's movement rule whether it can reach the target square. Turn
//! order plays no part. Pawns are the exception: they attack the diagonal
//! squares ahead of them even when those squares are empty.

use super::pawn::pawn_attacks;
use super::Movement;
use crate::board::Board;
use crate::location::BoardLocation;
use crate::types::{Color, PieceType};

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `board` - The position to inspect
/// * `square` - Target square to check
/// * `by_color` - Color of pieces that might attack
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 attacked by black?
/// let attacked = is_square_attacked(&board, "e4".parse()?, Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: BoardLocation, by_color: Color) -> bool {
    board.pieces_of(by_color).any(|(from, piece)| {
        if piece.piece_type == PieceType::Pawn {
            return pawn_attacks(by_color, from, square);
        }
        piece
            .piece_type
            .movements()
            .iter()
            .any(|movement| attacks_with(*movement, board, by_color, from, square))
    })
}

fn attacks_with(
    movement: Movement,
    board: &Board,
    color: Color,
    from: BoardLocation,
    square: BoardLocation,
) -> bool {
    // Squares holding the attacker's own pieces are "defended", not attacked;
    // the movement rule already refuses them.
    movement.can_move(board, color, from, square, None)
}

/// Is the king of `color` attacked on this board?
///
/// A board with no king of that color is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_location(color) {
        Some(king) => is_square_attacked(board, king, !color),
        None => false,
    }
}
