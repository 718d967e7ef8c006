//! Command line parsing for the interactive prompt
//!
//! ## Accepted Forms
//!
//! - `e2e4`, `e2 e4`, `e7e8q` - algebraic squares, optional promotion letter
//! - `4 1 4 3` - zero-based file and rank of source and destination
//! - `moves [square]` - list legal moves, optionally for one piece
//! - `board`, `help`, `quit`

use chess_engine::{BoardLocation, LocationError, Move, PieceType};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("'{0}' is not a number")]
    BadNumber(String),

    #[error("Unknown promotion piece '{0}' (use q, r, b or n)")]
    BadPromotion(String),

    #[error("Cannot understand '{0}' (type 'help' for the accepted forms)")]
    Unrecognised(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    /// Zero-based `(x, y)` pairs, checked against the board by the game
    Coordinates { from: (i32, i32), to: (i32, i32) },
    /// Legal moves for one piece or, with `None`, for the side to move
    Moves(Option<BoardLocation>),
    Board,
    Help,
    Quit,
}

pub const HELP: &str = "\
Enter a move as 'e2e4', 'e2 e4' or '4 1 4 3' (file rank file rank, from 0).
Add a letter to promote: 'e7e8n'. Without one you will be asked.
Other commands: moves [square], board, help, quit";

/// Parse one line typed at the move prompt
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [] => Err(InputError::Empty),
        ["quit" | "exit" | "q"] => Ok(Command::Quit),
        ["help" | "?"] => Ok(Command::Help),
        ["board"] => Ok(Command::Board),
        ["moves"] => Ok(Command::Moves(None)),
        ["moves", square] => Ok(Command::Moves(Some(square.parse()?))),
        [text] => parse_compact(text).map(Command::Move),
        [from, to] => parse_pair(from, to).map(Command::Move),
        [x1, y1, x2, y2] => Ok(Command::Coordinates {
            from: (number(x1)?, number(y1)?),
            to: (number(x2)?, number(y2)?),
        }),
        _ => Err(InputError::Unrecognised(line.to_string())),
    }
}

/// Parse the answer to a promotion prompt
pub fn parse_promotion(line: &str) -> Result<PieceType, InputError> {
    let text = line.trim().to_ascii_lowercase();
    let piece_type = match text.as_str() {
        "q" | "queen" => PieceType::Queen,
        "r" | "rook" => PieceType::Rook,
        "b" | "bishop" => PieceType::Bishop,
        "n" | "knight" => PieceType::Knight,
        "" => return Err(InputError::Empty),
        _ => return Err(InputError::BadPromotion(text)),
    };
    Ok(piece_type)
}

/// `e2e4` or `e7e8q`
fn parse_compact(text: &str) -> Result<Move, InputError> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(InputError::Unrecognised(text.to_string()));
    }
    let (squares, promotion) = text.split_at(4);
    parse_pair(&squares[..2], &format!("{}{}", &squares[2..], promotion))
}

/// `e2` `e4`, where the destination may carry a promotion letter
fn parse_pair(from: &str, to: &str) -> Result<Move, InputError> {
    let from: BoardLocation = from.parse()?;
    if !to.is_ascii() || !(2..=3).contains(&to.len()) {
        return Err(InputError::Unrecognised(to.to_string()));
    }
    let (square, promotion) = to.split_at(2);
    let to: BoardLocation = square.parse()?;

    if promotion.is_empty() {
        Ok(Move::new(from, to))
    } else {
        Ok(Move::with_promotion(from, to, parse_promotion(promotion)?))
    }
}

fn number(text: &str) -> Result<i32, InputError> {
    text.parse()
        .map_err(|_| InputError::BadNumber(text.to_string()))
}
