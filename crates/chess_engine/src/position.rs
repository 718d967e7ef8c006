//! Position: board plus side to move
//!
//! A [`Position`] is everything the rules need to judge the next move: the
//! board, whose turn it is, and the en passant window left by the previous
//! move. It layers the king-safety filter over the movement rules and knows how
//! to apply a validated move. [`crate::game::Game`] wraps one as its
//! authoritative state, and the AI search works on cheap copies of it.
//!
//! # Validation pipeline
//!
//! 1. Turn and ownership: `NotYourTurn`, `NoPieceAtSource`, `WrongColorPiece`
//! 2. Geometry: the piece's archetype rule, castling, or en passant, else
//!    `IllegalGeometry`
//! 3. King safety on a duplicated board: `WouldMoveIntoCheck` when the mover
//!    was safe before the move, `MustResolveCheck` when already in check

use crate::board::Board;
use crate::error::MoveError;
use crate::game::{is_promotion_move, GameState};
use crate::location::BoardLocation;
use crate::move_gen::{self, castle_for, is_in_check, Castle, EnPassant};
use crate::types::{Color, Move, Piece, PieceType};

/// How a geometrically valid move is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Relocation, capturing whatever stands on the destination
    Standard,
    /// King two squares sideways with the rook jumping over it
    Castle(Castle),
    /// Pawn diagonal onto the skipped square, removing the passed pawn
    EnPassant { captured: BoardLocation },
}

/// Everything that changed on the board when a move was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The moved piece as it stands after the move
    pub piece: Piece,
    pub from: BoardLocation,
    pub to: BoardLocation,
    /// Captured piece and the square it was removed from
    pub captured: Option<(Piece, BoardLocation)>,
    /// Rook moved by castling
    pub castle: Option<(Piece, Castle)>,
    pub is_en_passant: bool,
    /// Type the pawn was promoted to during this application
    pub promotion: Option<PieceType>,
    /// A pawn reached the far rank without a promotion choice
    pub awaiting_promotion: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    en_passant: Option<EnPassant>,
}

impl Default for Position {
    fn default() -> Self {
        Position::new(Board::standard(), Color::White)
    }
}

impl Position {
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            en_passant: None,
        }
    }

    /// Same position with an en passant window, as if the previous move had
    /// been a double pawn step
    pub fn with_en_passant(mut self, en_passant: Option<EnPassant>) -> Self {
        self.en_passant = en_passant;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Does `from -> to` put a pawn on its promotion rank?
    pub fn is_promotion(&self, from: BoardLocation, to: BoardLocation) -> bool {
        self.board
            .piece_at(from)
            .map(|piece| is_promotion_move(piece.piece_type, piece.color, to.y()))
            .unwrap_or(false)
    }

    /// Run the full validation pipeline for `color` moving `from -> to`
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks; see the module docs for order.
    pub fn validate(
        &self,
        color: Color,
        from: BoardLocation,
        to: BoardLocation,
    ) -> Result<MoveKind, MoveError> {
        if color != self.side_to_move {
            return Err(MoveError::NotYourTurn { color });
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { location: from })?;

        if piece.color != color {
            return Err(MoveError::WrongColorPiece {
                location: from,
                color,
            });
        }

        let kind = self
            .geometry(piece, from, to)
            .ok_or(MoveError::IllegalGeometry { from, to })?;

        let mut simulated = self.board.clone();
        move_pieces(&mut simulated, from, to, kind);

        if is_in_check(&simulated, color) {
            return Err(if is_in_check(&self.board, color) {
                MoveError::MustResolveCheck
            } else {
                MoveError::WouldMoveIntoCheck
            });
        }

        Ok(kind)
    }

    /// [`Position::validate`] plus a check of the promotion choice
    pub fn validate_move(&self, color: Color, mv: Move) -> Result<MoveKind, MoveError> {
        let kind = self.validate(color, mv.from, mv.to)?;
        if let Some(piece_type) = mv.promotion {
            if !piece_type.is_promotion_target() || !self.is_promotion(mv.from, mv.to) {
                return Err(MoveError::InvalidPromotion { piece_type });
            }
        }
        Ok(kind)
    }

    fn geometry(&self, piece: Piece, from: BoardLocation, to: BoardLocation) -> Option<MoveKind> {
        if piece.piece_type == PieceType::King {
            if let Some(castle) = castle_for(&self.board, piece.color, from, to) {
                return Some(MoveKind::Castle(castle));
            }
        }

        if !move_gen::can_piece_move(&self.board, from, to, self.en_passant) {
            return None;
        }

        if piece.piece_type == PieceType::Pawn && from.x() != to.x() && self.board.is_empty(to) {
            // Only en passant lets a pawn step diagonally onto an empty square
            let window = self.en_passant?;
            return Some(MoveKind::EnPassant {
                captured: window.victim,
            });
        }

        Some(MoveKind::Standard)
    }

    /// Is `from -> to` fully legal for the side to move?
    pub fn is_legal(&self, from: BoardLocation, to: BoardLocation) -> bool {
        self.validate(self.side_to_move, from, to).is_ok()
    }

    /// Every legal destination of the side-to-move piece on `from`, in index order
    ///
    /// Empty when the square is empty or holds an opponent's piece.
    pub fn legal_destinations(&self, from: BoardLocation) -> Vec<BoardLocation> {
        let Some(piece) = self.board.piece_at(from) else {
            return Vec::new();
        };
        if piece.color != self.side_to_move {
            return Vec::new();
        }

        BoardLocation::all()
            .filter(|&to| self.validate(piece.color, from, to).is_ok())
            .collect()
    }

    /// Every legal move for the side to move
    ///
    /// Ordered by source index, then destination index. Promotions are listed
    /// once per promotion type, strongest first.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.collect_moves(&[
            PieceType::Queen,
            PieceType::Rook,
            PieceType::Bishop,
            PieceType::Knight,
        ])
    }

    /// Legal moves where every promotion becomes `promotion`
    pub(crate) fn legal_moves_promoting_to(&self, promotion: PieceType) -> Vec<Move> {
        self.collect_moves(&[promotion])
    }

    fn collect_moves(&self, promotions: &[PieceType]) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, _) in self.board.pieces_of(self.side_to_move) {
            for to in self.legal_destinations(from) {
                if self.is_promotion(from, to) {
                    moves.extend(
                        promotions
                            .iter()
                            .map(|&piece_type| Move::with_promotion(from, to, piece_type)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Does the side to move have at least one legal move?
    pub fn has_legal_move(&self) -> bool {
        self.board.pieces_of(self.side_to_move).any(|(from, piece)| {
            BoardLocation::all().any(|to| self.validate(piece.color, from, to).is_ok())
        })
    }

    /// Classify the position for the side to move
    pub fn status(&self) -> GameState {
        let color = self.side_to_move;
        let in_check = self.is_in_check(color);
        match (self.has_legal_move(), in_check) {
            (false, true) => GameState::Checkmate(color),
            (false, false) => GameState::Stalemate,
            (true, true) => GameState::Check(color),
            (true, false) => GameState::Normal,
        }
    }

    /// Validate and apply `mv` on a copy, handing back the new position
    ///
    /// A promoting move without a choice promotes to a queen. Used by the
    /// search, which never leaves a promotion pending.
    pub fn play(&self, mv: Move) -> Result<Position, MoveError> {
        let kind = self.validate_move(self.side_to_move, mv)?;
        let mut next = self.clone();
        let mv = if mv.promotion.is_none() && self.is_promotion(mv.from, mv.to) {
            Move::with_promotion(mv.from, mv.to, PieceType::Queen)
        } else {
            mv
        };
        next.apply(mv, kind);
        Ok(next)
    }

    /// Apply a move already validated with [`Position::validate`]
    ///
    /// Switches the side to move unless a pawn is left waiting for its
    /// promotion choice; [`Position::promote`] finishes that turn.
    pub(crate) fn apply(&mut self, mv: Move, kind: MoveKind) -> AppliedMove {
        let (captured, rook) = move_pieces(&mut self.board, mv.from, mv.to, kind);

        let mut piece = match self.board.piece_at_mut(mv.to) {
            Some(piece) => {
                piece.has_moved = true;
                *piece
            }
            None => unreachable!("validated move left no piece on its destination"),
        };

        let castle = match (kind, rook) {
            (MoveKind::Castle(castle), Some(rook)) => Some((rook, castle)),
            _ => None,
        };

        self.en_passant = if piece.piece_type == PieceType::Pawn {
            EnPassant::after_double_step(mv.from, mv.to)
        } else {
            None
        };

        let reaches_last_rank = is_promotion_move(piece.piece_type, piece.color, mv.to.y());

        let mut promotion = None;
        let mut awaiting_promotion = false;
        if reaches_last_rank {
            match mv.promotion {
                Some(piece_type) => {
                    if let Some(promoted) = self.transform(mv.to, piece_type) {
                        piece = promoted;
                    }
                    promotion = Some(piece_type);
                }
                None => awaiting_promotion = true,
            }
        }

        if !awaiting_promotion {
            self.side_to_move = !self.side_to_move;
        }

        AppliedMove {
            piece,
            from: mv.from,
            to: mv.to,
            captured,
            castle,
            is_en_passant: matches!(kind, MoveKind::EnPassant { .. }),
            promotion,
            awaiting_promotion,
        }
    }

    /// Turn the pawn on `at` into `piece_type` and hand the move to the opponent
    pub(crate) fn promote(&mut self, at: BoardLocation, piece_type: PieceType) -> Option<Piece> {
        let promoted = self.transform(at, piece_type)?;
        self.side_to_move = !self.side_to_move;
        Some(promoted)
    }

    fn transform(&mut self, at: BoardLocation, piece_type: PieceType) -> Option<Piece> {
        let piece = self.board.piece_at_mut(at)?;
        piece.piece_type = piece_type;
        Some(*piece)
    }
}

/// Move the pieces for `kind` on `board`, returning the captured piece (with
/// its square) and the castled rook
fn move_pieces(
    board: &mut Board,
    from: BoardLocation,
    to: BoardLocation,
    kind: MoveKind,
) -> (Option<(Piece, BoardLocation)>, Option<Piece>) {
    match kind {
        MoveKind::Standard => {
            let captured = board.relocate(from, to).map(|piece| (piece, to));
            (captured, None)
        }
        MoveKind::EnPassant { captured } => {
            let victim = board.remove(captured).map(|piece| (piece, captured));
            board.relocate(from, to);
            (victim, None)
        }
        MoveKind::Castle(castle) => {
            board.relocate(from, to);
            board.relocate(castle.rook_from, castle.rook_to);
            let rook = board.piece_at_mut(castle.rook_to).map(|rook| {
                rook.has_moved = true;
                *rook
            });
            (None, rook)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: i32, y: i32) -> BoardLocation {
        BoardLocation::new(x, y).unwrap()
    }

    #[test]
    fn test_opening_has_twenty_moves() {
        let position = Position::default();
        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.status(), GameState::Normal);
    }

    #[test]
    fn test_validation_order() {
        let position = Position::default();
        assert_eq!(
            position.validate(Color::Black, loc(4, 6), loc(4, 4)),
            Err(MoveError::NotYourTurn {
                color: Color::Black
            })
        );
        assert_eq!(
            position.validate(Color::White, loc(4, 4), loc(4, 5)),
            Err(MoveError::NoPieceAtSource {
                location: loc(4, 4)
            })
        );
        assert_eq!(
            position.validate(Color::White, loc(4, 6), loc(4, 5)),
            Err(MoveError::WrongColorPiece {
                location: loc(4, 6),
                color: Color::White
            })
        );
        assert_eq!(
            position.validate(Color::White, loc(0, 0), loc(0, 3)),
            Err(MoveError::IllegalGeometry {
                from: loc(0, 0),
                to: loc(0, 3)
            })
        );
        assert_eq!(
            position.validate(Color::White, loc(4, 1), loc(4, 3)),
            Ok(MoveKind::Standard)
        );
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let mut board = Board::empty();
        board.place(PieceType::King, Color::White, loc(4, 0));
        board.place(PieceType::Bishop, Color::White, loc(4, 1));
        board.place(PieceType::Rook, Color::Black, loc(4, 7));
        board.place(PieceType::King, Color::Black, loc(0, 7));
        let position = Position::new(board, Color::White);

        assert_eq!(
            position.validate(Color::White, loc(4, 1), loc(5, 2)),
            Err(MoveError::WouldMoveIntoCheck)
        );
        assert!(position.legal_destinations(loc(4, 1)).is_empty());
    }

    #[test]
    fn test_apply_sets_en_passant_window() {
        let mut position = Position::default();
        let mv = Move::new(loc(4, 1), loc(4, 3));
        let kind = position.validate(Color::White, mv.from, mv.to).unwrap();
        let applied = position.apply(mv, kind);

        assert!(applied.piece.has_moved);
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(
            position.en_passant(),
            Some(EnPassant {
                target: loc(4, 2),
                victim: loc(4, 3)
            })
        );
    }

    #[test]
    fn test_play_leaves_original_untouched() {
        let position = Position::default();
        let next = position.play(Move::new(loc(6, 0), loc(5, 2))).unwrap();
        assert!(position.board().piece_at(loc(5, 2)).is_none());
        assert_eq!(
            next.board().piece_at(loc(5, 2)).map(|p| p.piece_type),
            Some(PieceType::Knight)
        );
        assert_eq!(next.side_to_move(), Color::Black);
    }

    #[test]
    fn test_promotion_choice_only_on_promoting_moves() {
        let position = Position::default();
        assert_eq!(
            position.validate_move(
                Color::White,
                Move::with_promotion(loc(4, 1), loc(4, 2), PieceType::Queen)
            ),
            Err(MoveError::InvalidPromotion {
                piece_type: PieceType::Queen
            })
        );
    }

    #[test]
    fn test_promotion_moves_listed_per_type() {
        let mut board = Board::empty();
        board.place(PieceType::King, Color::White, loc(0, 0));
        board.place(PieceType::King, Color::Black, loc(7, 0));
        board.place(PieceType::Pawn, Color::White, loc(3, 6));
        let position = Position::new(board, Color::White);

        let promotions: Vec<_> = position
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == loc(3, 6))
            .map(|mv| mv.promotion)
            .collect();
        assert_eq!(
            promotions,
            vec![
                Some(PieceType::Queen),
                Some(PieceType::Rook),
                Some(PieceType::Bishop),
                Some(PieceType::Knight)
            ]
        );
        assert_eq!(
            position.legal_moves_promoting_to(PieceType::Queen).len(),
            position.legal_moves().len() - 3
        );
    }
}
