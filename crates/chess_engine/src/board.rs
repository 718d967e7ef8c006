//! Board representation
//!
//! A mailbox of 64 optional pieces indexed by [`BoardLocation::index`]. The
//! board is the single source of truth for where pieces stand; it knows nothing
//! about whose turn it is or how the position was reached. Cloning a board is a
//! plain value copy, which is what move simulation relies on.

use crate::location::{BoardLocation, NUM_SQUARES};
use crate::types::{Color, Piece, PieceTag, PieceType, ALL_COLORS};
use std::fmt;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
    next_tag: u32,
}

impl Default for Board {
    /// The standard starting layout
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
            next_tag: 0,
        }
    }

    /// The standard starting layout, white on ranks 1-2
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in ALL_COLORS {
            for (x, piece_type) in BACK_RANK.iter().enumerate() {
                board.place_at(x as u8, color.back_rank(), *piece_type, color);
            }
            for x in 0..8 {
                board.place_at(x, color.pawn_rank(), PieceType::Pawn, color);
            }
        }
        board
    }

    fn place_at(&mut self, x: u8, y: u8, piece_type: PieceType, color: Color) {
        let index = y as usize * 8 + x as usize;
        let tag = self.allocate_tag();
        self.squares[index] = Some(Piece::new(piece_type, color, tag));
    }

    fn allocate_tag(&mut self) -> PieceTag {
        let tag = PieceTag(self.next_tag);
        self.next_tag += 1;
        tag
    }

    /// Put a new, unmoved piece on `location`, replacing whatever stood there.
    /// Returns the tag assigned to the piece.
    pub fn place(&mut self, piece_type: PieceType, color: Color, location: BoardLocation) -> PieceTag {
        let tag = self.allocate_tag();
        self.squares[location.index()] = Some(Piece::new(piece_type, color, tag));
        tag
    }

    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<Piece> {
        self.squares[location.index()]
    }

    #[inline]
    pub fn piece_at_mut(&mut self, location: BoardLocation) -> Option<&mut Piece> {
        self.squares[location.index()].as_mut()
    }

    #[inline]
    pub fn is_empty(&self, location: BoardLocation) -> bool {
        self.squares[location.index()].is_none()
    }

    #[inline]
    pub fn color_at(&self, location: BoardLocation) -> Option<Color> {
        self.squares[location.index()].map(|piece| piece.color)
    }

    /// Take the piece off `location`
    pub fn remove(&mut self, location: BoardLocation) -> Option<Piece> {
        self.squares[location.index()].take()
    }

    /// Relocate the piece on `from` to `to`, returning whatever stood on `to`.
    /// Does not touch the `has_moved` flag.
    pub fn relocate(&mut self, from: BoardLocation, to: BoardLocation) -> Option<Piece> {
        let moving = self.squares[from.index()].take();
        std::mem::replace(&mut self.squares[to.index()], moving)
    }

    /// Every occupied square with its piece, in index order
    pub fn pieces(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        BoardLocation::all().filter_map(move |location| {
            self.squares[location.index()].map(|piece| (location, piece))
        })
    }

    /// Every piece of one color, in index order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_location(&self, color: Color) -> Option<BoardLocation> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.piece_type == PieceType::King)
            .map(|(location, _)| location)
    }

    pub fn count(&self, piece_type: PieceType, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.piece_type == piece_type)
            .count()
    }

    /// Where the piece with this tag currently stands
    pub fn find_tag(&self, tag: PieceTag) -> Option<BoardLocation> {
        self.pieces()
            .find(|(_, piece)| piece.tag() == tag)
            .map(|(location, _)| location)
    }
}

impl fmt::Display for Board {
    /// Rank 8 at the top, `.` for empty squares
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8u8).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..8u8 {
                let symbol = self.squares[y as usize * 8 + x as usize]
                    .map(|piece| piece.symbol())
                    .unwrap_or('.');
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
