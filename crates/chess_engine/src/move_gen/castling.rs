//! Castling
//!
//! Castling is written as the king moving two squares toward one of its rooks;
//! the rook then jumps to the square the king crossed.
//!
//! ## Castling Rules
//!
//! - The king has never moved and stands on its home square (e1 or e8)
//! - The rook on that side is the mover's own rook, on its corner, and has
//!   never moved (tracked per rook, not per side)
//! - Every square between king and rook is empty
//! - The king's start square, the square it crosses and its destination are
//!   all unattacked

use super::attack::is_square_attacked;
use crate::board::Board;
use crate::location::BoardLocation;
use crate::types::{Color, PieceType};

/// File the king starts on
const KING_HOME_FILE: u8 = 4;

/// Rook relocation that accompanies a castling king move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castle {
    pub rook_from: BoardLocation,
    pub rook_to: BoardLocation,
}

/// Recognise `from -> to` as a legal castle for `color`
///
/// Returns the rook relocation when every castling condition holds, `None`
/// otherwise (including for ordinary king moves).
pub fn castle_for(
    board: &Board,
    color: Color,
    from: BoardLocation,
    to: BoardLocation,
) -> Option<Castle> {
    let king = board.piece_at(from)?;
    if !king.is(PieceType::King, color) || king.has_moved {
        return None;
    }

    let (dx, dy) = from.delta(to);
    if dy != 0 || dx.abs() != 2 || from.y() != color.back_rank() || from.x() != KING_HOME_FILE {
        return None;
    }

    let step = dx.signum();
    let rook_x = if step > 0 { 7 } else { 0 };
    let rook_from = BoardLocation::new(rook_x, from.y() as i32).ok()?;
    if to == rook_from {
        return None;
    }
    let rook = board.piece_at(rook_from)?;
    if !rook.is(PieceType::Rook, color) || rook.has_moved {
        return None;
    }

    // No pieces between king and rook
    let mut square = from.offset(step, 0)?;
    while square != rook_from {
        if !board.is_empty(square) {
            return None;
        }
        square = square.offset(step, 0)?;
    }

    // King may not castle out of, through or into check
    let crossed = from.offset(step, 0)?;
    let enemy = !color;
    if [from, crossed, to]
        .iter()
        .any(|&square| is_square_attacked(board, square, enemy))
    {
        return None;
    }

    Some(Castle {
        rook_from,
        rook_to: crossed,
    })
}
