//! Movement rules
//!
//! Decides whether a piece's archetype permits a geometric transition on a
//! board snapshot. These rules ignore whether the mover's own king would be
//! left in check; that filter is layered on top in [`crate::position`].
//!
//! # Archetypes
//!
//! Every piece type maps to one or more [`Movement`] archetypes:
//!
//! | Piece  | Archetypes                  |
//! |--------|-----------------------------|
//! | Pawn   | `Pawn`                      |
//! | Knight | `Knight`                    |
//! | Bishop | `Diagonal`                  |
//! | Rook   | `StraightLine`              |
//! | Queen  | `StraightLine` + `Diagonal` |
//! | King   | `King`                      |
//!
//! A piece may make a move if any of its archetypes accepts it. Castling is a
//! king move recognised one layer up, see [`castling`].

pub mod attack;
pub mod bishop;
pub mod castling;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
mod sliding;

#[cfg(test)]
mod tests;

use crate::board::Board;
use crate::location::BoardLocation;
use crate::types::{Color, PieceType};

pub use attack::{is_in_check, is_square_attacked};
pub use castling::{castle_for, Castle};
pub use pawn::EnPassant;

/// Movement archetype shared by one or more piece types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    StraightLine,
    Diagonal,
    Knight,
    King,
    Pawn,
}

impl PieceType {
    /// The archetypes this piece type moves by
    pub fn movements(self) -> &'static [Movement] {
        match self {
            PieceType::Pawn => &[Movement::Pawn],
            PieceType::Knight => &[Movement::Knight],
            PieceType::Bishop => &[Movement::Diagonal],
            PieceType::Rook => &[Movement::StraightLine],
            PieceType::Queen => &[Movement::StraightLine, Movement::Diagonal],
            PieceType::King => &[Movement::King],
        }
    }
}

impl Movement {
    /// Check if this archetype lets a `color` piece go from `from` to `to`
    ///
    /// Shared rules are applied before the archetype geometry: a piece can
    /// never stay where it is or land on a piece of its own color.
    ///
    /// # Arguments
    ///
    /// * `board` - Snapshot to test against
    /// * `color` - Color of the moving piece
    /// * `from` / `to` - Source and destination squares
    /// * `en_passant` - Capture window opened by the previous move, if any
    pub fn can_move(
        self,
        board: &Board,
        color: Color,
        from: BoardLocation,
        to: BoardLocation,
        en_passant: Option<EnPassant>,
    ) -> bool {
        if from == to {
            return false;
        }

        if board.color_at(to) == Some(color) {
            return false;
        }

        match self {
            Movement::StraightLine => rook::is_valid_straight_line_move(board, from, to),
            Movement::Diagonal => bishop::is_valid_diagonal_move(board, from, to),
            Movement::Knight => knight::is_valid_knight_move(from, to),
            Movement::King => king::is_valid_king_move(from, to),
            Movement::Pawn => pawn::is_valid_pawn_move(board, color, from, to, en_passant),
        }
    }
}

/// Check if the piece standing on `from` may move to `to` by its archetypes
///
/// Returns `false` for an empty source square.
pub fn can_piece_move(
    board: &Board,
    from: BoardLocation,
    to: BoardLocation,
    en_passant: Option<EnPassant>,
) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    piece
        .piece_type
        .movements()
        .iter()
        .any(|movement| movement.can_move(board, piece.color, from, to, en_passant))
}

/// Get every destination the piece on `position` reaches by its archetypes
///
/// Scans all 64 squares in index order, so the result is stable. Does not
/// include castling and does not filter for king safety.
pub fn get_possible_moves(
    board: &Board,
    position: BoardLocation,
    en_passant: Option<EnPassant>,
) -> Vec<BoardLocation> {
    BoardLocation::all()
        .filter(|&to| can_piece_move(board, position, to, en_passant))
        .collect()
}
