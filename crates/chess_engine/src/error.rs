//! Error types for chess engine
//!
//! Every rejection the engine produces is local and recoverable. Callers match on
//! the variant to give distinct feedback ("can't move there" versus "that would
//! leave you in check"). Broken board setups are reported separately through
//! [`SetupError`] because they are programming errors, not user mistakes.

use crate::location::BoardLocation;
use crate::types::{Color, PieceType};
use thiserror::Error;

/// A coordinate that does not name one of the 64 squares
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Either axis outside `0..=7`
    #[error("Invalid board location ({x}, {y}): both axes must be in 0..=7")]
    OutOfRange { x: i32, y: i32 },

    /// Linear index outside `0..64`
    #[error("Invalid square index: {index} (must be 0-63)")]
    IndexOutOfRange { index: usize },

    /// Text that is not algebraic notation such as `e4`
    #[error("Cannot parse '{text}' as a square (expected e.g. 'e4')")]
    Unparseable { text: String },
}

/// Reasons a move attempt is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The piece's movement rule does not allow this destination
    #[error("Piece at {from} cannot move to {to}")]
    IllegalGeometry { from: BoardLocation, to: BoardLocation },

    /// The requesting player is not the side to move
    #[error("It is not {color:?}'s turn")]
    NotYourTurn { color: Color },

    /// Source square is empty
    #[error("No piece at source square {location}")]
    NoPieceAtSource { location: BoardLocation },

    /// Source square holds an opponent's piece
    #[error("Piece at {location} does not belong to {color:?}")]
    WrongColorPiece { location: BoardLocation, color: Color },

    /// The move would expose a king that was safe before it
    #[error("Player cannot move in to check")]
    WouldMoveIntoCheck,

    /// The mover is in check and this move does not get out of it
    #[error("Player must move out of check")]
    MustResolveCheck,

    /// A coordinate was outside the board
    #[error(transparent)]
    InvalidCoordinate(#[from] LocationError),

    /// Checkmate or stalemate has already ended the game
    #[error("The game is over")]
    GameOver,

    /// A pawn is waiting for its promotion choice
    #[error("A pawn promotion at {location} must be resolved first")]
    PromotionPending { location: BoardLocation },

    /// A promotion piece was supplied that cannot be used here
    #[error("Cannot promote to {piece_type:?} with this move")]
    InvalidPromotion { piece_type: PieceType },

    /// A background search finished for a position that is no longer current
    #[error("Search result was computed for ply {searched}, game is at ply {current}")]
    StaleSearch { searched: u32, current: u32 },
}

/// Reasons a promotion choice is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromotionError {
    #[error("No pawn promotion is pending")]
    NoPromotionPending,

    #[error("Pawns cannot promote to {piece_type:?}")]
    InvalidPromotion { piece_type: PieceType },
}

/// Board or player configuration that breaks the engine's invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("No {color:?} king on the board")]
    MissingKing { color: Color },

    #[error("More than one {color:?} king on the board")]
    DuplicateKing { color: Color },

    /// The side that just moved would still have its king attacked
    #[error("{color:?} king is attacked but it is not {color:?}'s turn")]
    OpponentInCheck { color: Color },

    #[error("Player for the {expected:?} seat plays {found:?}")]
    PlayerColorMismatch { expected: Color, found: Color },
}

/// Result type alias for move operations
pub type ChessEngineResult<T> = Result<T, MoveError>;
