//! Pawn movement
//!
//! Pawns are the only pieces whose direction depends on color: white advances
//! toward increasing `y`, black toward decreasing `y`.
//!
//! ## Pawn Movement Rules
//!
//! - One square forward onto an empty square
//! - Two squares forward from the starting rank, only while unmoved and only
//!   if both the intermediate and destination squares are empty
//! - One square diagonally forward, only to capture an opposing piece
//! - En passant: right after an opposing pawn advanced two squares to land
//!   beside this pawn, this pawn may move diagonally onto the square it skipped
//!   and capture it
//! - Never captures straight ahead, never moves diagonally onto an empty square
//!   (en passant aside)

use crate::board::Board;
use crate::location::BoardLocation;
use crate::types::{Color, PieceType};

/// Capture window left by a two-square pawn advance
///
/// Only valid for the single move that immediately follows the advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassant {
    /// Square the advancing pawn skipped over; the capturer lands here
    pub target: BoardLocation,
    /// Square the advanced pawn now stands on; it is removed by the capture
    pub victim: BoardLocation,
}

impl EnPassant {
    /// The window opened by a pawn moving from `from` to `to`, if it was a double step
    pub fn after_double_step(from: BoardLocation, to: BoardLocation) -> Option<EnPassant> {
        let (dx, dy) = from.delta(to);
        if dx != 0 || dy.abs() != 2 {
            return None;
        }
        let target = from.offset(0, dy.signum())?;
        Some(EnPassant { target, victim: to })
    }
}

/// Check if a pawn of `color` on `from` may move to `to`
///
/// The caller has already rejected same-square moves and friendly
/// destinations. `has_moved` is read from the piece on `from`.
pub fn is_valid_pawn_move(
    board: &Board,
    color: Color,
    from: BoardLocation,
    to: BoardLocation,
    en_passant: Option<EnPassant>,
) -> bool {
    let direction = color.forward();
    let (dx, dy) = from.delta(to);

    // Forward move
    if dx == 0 && dy == direction {
        return board.is_empty(to);
    }

    // Double move from starting position
    if dx == 0 && dy == 2 * direction {
        let has_moved = board.piece_at(from).map(|p| p.has_moved).unwrap_or(true);
        if has_moved || from.y() != color.pawn_rank() {
            return false;
        }
        let intermediate = match from.offset(0, direction) {
            Some(square) => square,
            None => return false,
        };
        return board.is_empty(intermediate) && board.is_empty(to);
    }

    // Capture diagonally
    if dx.abs() == 1 && dy == direction {
        if let Some(target_color) = board.color_at(to) {
            return target_color != color;
        }
        return is_en_passant_capture(board, color, from, to, en_passant);
    }

    false
}

/// Check the en passant exception for a diagonal step onto an empty square
pub(crate) fn is_en_passant_capture(
    board: &Board,
    color: Color,
    from: BoardLocation,
    to: BoardLocation,
    en_passant: Option<EnPassant>,
) -> bool {
    let Some(window) = en_passant else {
        return false;
    };

    if window.target != to || !board.is_empty(to) {
        return false;
    }

    // The passed pawn must stand beside the capturer on the same rank
    let (dx, dy) = from.delta(window.victim);
    if dy != 0 || dx.abs() != 1 {
        return false;
    }

    board
        .piece_at(window.victim)
        .map(|victim| victim.is(PieceType::Pawn, !color))
        .unwrap_or(false)
}

/// Does a pawn of `color` attack `target` from `from`?
///
/// Attacks are the diagonal-forward squares regardless of what stands there,
/// which is what check detection and castling transit need.
pub(crate) fn pawn_attacks(color: Color, from: BoardLocation, target: BoardLocation) -> bool {
    let (dx, dy) = from.delta(target);
    dx.abs() == 1 && dy == color.forward()
}
