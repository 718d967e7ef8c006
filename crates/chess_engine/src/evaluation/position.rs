//! Piece placement evaluation
//!
//! Piece-square tables reward centralised minor pieces, advanced pawns and a
//! sheltered king. Tables are written from white's side with rank 1 on the
//! first row, so a white piece on `(x, y)` reads entry `y * 8 + x` and a black
//! piece reads the vertically mirrored entry.

use crate::board::Board;
use crate::location::BoardLocation;
use crate::types::{Color, PieceType};

#[rustfmt::skip]
const PAWN_TABLE: [i8; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     4,  8,  8,-16,-16,  8,  8,  4,
     4, -4, -8,  0,  0, -8, -4,  4,
     0,  0,  4, 18, 18,  4,  0,  0,
     6,  6, 10, 22, 22, 10,  6,  6,
    12, 12, 18, 28, 28, 18, 12, 12,
    40, 40, 40, 40, 40, 40, 40, 40,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i8; 64] = [
   -40,-30,-20,-20,-20,-20,-30,-40,
   -30,-15,  0,  4,  4,  0,-15,-30,
   -20,  4, 10, 12, 12, 10,  4,-20,
   -20,  0, 12, 18, 18, 12,  0,-20,
   -20,  4, 12, 18, 18, 12,  4,-20,
   -20,  0, 10, 12, 12, 10,  0,-20,
   -30,-15,  0,  0,  0,  0,-15,-30,
   -40,-30,-20,-20,-20,-20,-30,-40,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i8; 64] = [
   -15, -8, -8, -8, -8, -8, -8,-15,
    -8,  6,  0,  0,  0,  0,  6, -8,
    -8,  8,  8,  8,  8,  8,  8, -8,
    -8,  0,  8, 10, 10,  8,  0, -8,
    -8,  4,  6, 10, 10,  6,  4, -8,
    -8,  0,  4,  8,  8,  4,  0, -8,
    -8,  0,  0,  0,  0,  0,  0, -8,
   -15, -8, -8, -8, -8, -8, -8,-15,
];

#[rustfmt::skip]
const ROOK_TABLE: [i8; 64] = [
     0,  0,  2,  6,  6,  2,  0,  0,
    -4,  0,  0,  0,  0,  0,  0, -4,
    -4,  0,  0,  0,  0,  0,  0, -4,
    -4,  0,  0,  0,  0,  0,  0, -4,
    -4,  0,  0,  0,  0,  0,  0, -4,
    -4,  0,  0,  0,  0,  0,  0, -4,
     8, 12, 12, 12, 12, 12, 12,  8,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i8; 64] = [
   -15, -8, -8, -4, -4, -8, -8,-15,
    -8,  0,  4,  0,  0,  0,  0, -8,
    -8,  4,  4,  4,  4,  4,  0, -8,
     0,  0,  4,  4,  4,  4,  0, -4,
    -4,  0,  4,  4,  4,  4,  0, -4,
    -8,  0,  4,  4,  4,  4,  0, -8,
    -8,  0,  0,  0,  0,  0,  0, -8,
   -15, -8, -8, -4, -4, -8, -8,-15,
];

#[rustfmt::skip]
const KING_TABLE: [i8; 64] = [
    16, 24,  8,  0,  0,  8, 24, 16,
    16, 16,  0,  0,  0,  0, 16, 16,
    -8,-16,-16,-16,-16,-16,-16, -8,
   -16,-24,-24,-32,-32,-24,-24,-16,
   -24,-32,-32,-40,-40,-32,-32,-24,
   -24,-32,-32,-40,-40,-32,-32,-24,
   -24,-32,-32,-40,-40,-32,-32,-24,
   -24,-32,-32,-40,-40,-32,-32,-24,
];

fn table(piece_type: PieceType) -> &'static [i8; 64] {
    match piece_type {
        PieceType::Pawn => &PAWN_TABLE,
        PieceType::Knight => &KNIGHT_TABLE,
        PieceType::Bishop => &BISHOP_TABLE,
        PieceType::Rook => &ROOK_TABLE,
        PieceType::Queen => &QUEEN_TABLE,
        PieceType::King => &KING_TABLE,
    }
}

/// Placement bonus for one piece, from its own side's perspective
pub fn square_bonus(piece_type: PieceType, color: Color, location: BoardLocation) -> i32 {
    let rank = match color {
        Color::White => location.y() as usize,
        Color::Black => 7 - location.y() as usize,
    };
    table(piece_type)[rank * 8 + location.x() as usize] as i32
}

/// Sum of placement bonuses, white minus black
pub fn evaluate_placement(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(location, piece)| {
            let bonus = square_bonus(piece.piece_type, piece.color, location);
            match piece.color {
                Color::White => bonus,
                Color::Black => -bonus,
            }
        })
        .sum()
}
