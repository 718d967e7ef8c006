//! # Core value types
//!
//! Colors, piece types, pieces and moves. Everything here is a small `Copy`
//! value so boards can be duplicated freely during move simulation and search.
//!
//! ## Piece identity
//!
//! Each [`Piece`] carries a [`PieceTag`] handed out by the board when the piece
//! is placed. The tag follows the piece from square to square and through
//! promotion, so a renderer can correlate "the same piece" across moves without
//! holding references into the board.

use crate::location::BoardLocation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

/// List all colors
pub const ALL_COLORS: [Color; 2] = [Color::White, Color::Black];

impl Color {
    /// Convert the `Color` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Rank direction pawns of this color advance in
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the king and rooks start on
    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank this color's pawns start on
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank where this color's pawns promote
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Piece types a pawn may become, weakest first
pub const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
];

impl PieceType {
    /// Convert the `PieceType` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Can a pawn be promoted to this type?
    #[inline]
    pub fn is_promotion_target(self) -> bool {
        PROMOTION_TYPES.contains(&self)
    }

    /// Upper-case letter used in diagrams and move text
    pub fn symbol(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Inverse of [`PieceType::symbol`], case-insensitive
    pub fn from_symbol(symbol: char) -> Option<PieceType> {
        match symbol.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// Stable identity of a piece for external correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceTag(pub(crate) u32);

impl PieceTag {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PieceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece standing on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    /// Set once the piece leaves its square; gates castling and the pawn double step
    pub has_moved: bool,
    tag: PieceTag,
}

impl Piece {
    pub(crate) fn new(piece_type: PieceType, color: Color, tag: PieceTag) -> Self {
        Self {
            piece_type,
            color,
            has_moved: false,
            tag,
        }
    }

    #[inline]
    pub fn tag(&self) -> PieceTag {
        self.tag
    }

    #[inline]
    pub fn is(&self, piece_type: PieceType, color: Color) -> bool {
        self.piece_type == piece_type && self.color == color
    }

    /// Diagram letter: upper case for white, lower case for black
    pub fn symbol(&self) -> char {
        let symbol = self.piece_type.symbol();
        match self.color {
            Color::White => symbol,
            Color::Black => symbol.to_ascii_lowercase(),
        }
    }
}

/// A requested or applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: BoardLocation,
    pub to: BoardLocation,
    /// Piece a pawn becomes on the far rank; `None` defers the choice to the player
    pub promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub fn new(from: BoardLocation, to: BoardLocation) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub fn with_promotion(from: BoardLocation, to: BoardLocation, promotion: PieceType) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion {
            None => write!(f, "{}{}", self.from, self.to),
            Some(piece_type) => write!(
                f,
                "{}{}{}",
                self.from,
                self.to,
                piece_type.symbol().to_ascii_lowercase()
            ),
        }
    }
}
