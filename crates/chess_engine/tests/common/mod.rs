//! Shared helpers for integration tests
//!
//! Boards are written as ASCII diagrams, rank 8 on the first row:
//!
//! ```text
//! "- - - - k - - -",
//! "- - - - - - - -",
//! ...
//! "R - - - K - - R",
//! ```
//!
//! Upper case letters are white pieces, lower case black. `-` is an empty
//! square, `*` an empty square the piece under test should reach and `!` an
//! empty square it must not reach. Spaces are ignored.

#![allow(dead_code)]

use chess_engine::{Board, BoardLocation, Color, Game, PieceType, Player};

pub struct Diagram {
    pub board: Board,
    pub allowed: Vec<BoardLocation>,
    pub disallowed: Vec<BoardLocation>,
}

pub fn loc(x: i32, y: i32) -> BoardLocation {
    BoardLocation::new(x, y).unwrap()
}

pub fn sq(name: &str) -> BoardLocation {
    name.parse().unwrap()
}

/// Parse an 8-row diagram
pub fn diagram(rows: &[&str]) -> Diagram {
    assert_eq!(rows.len(), 8, "diagram needs 8 ranks");

    let mut board = Board::empty();
    let mut allowed = Vec::new();
    let mut disallowed = Vec::new();

    for (row, text) in rows.iter().enumerate() {
        let y = 7 - row as i32;
        let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), 8, "rank {} needs 8 squares: {:?}", y + 1, text);

        for (x, cell) in cells.into_iter().enumerate() {
            let location = loc(x as i32, y);
            match cell {
                '-' => {}
                '*' => allowed.push(location),
                '!' => disallowed.push(location),
                symbol => {
                    let piece_type = PieceType::from_symbol(symbol)
                        .unwrap_or_else(|| panic!("unknown diagram symbol {symbol:?}"));
                    let color = if symbol.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    board.place(piece_type, color, location);
                }
            }
        }
    }

    allowed.sort_by_key(|l| l.index());
    Diagram {
        board,
        allowed,
        disallowed,
    }
}

pub fn board(rows: &[&str]) -> Board {
    diagram(rows).board
}

/// Two human seats on an arbitrary board
pub fn human_game(board: Board, side_to_move: Color) -> Game {
    Game::with_board(
        board,
        side_to_move,
        Player::human(Color::White),
        Player::human(Color::Black),
    )
    .expect("valid test board")
}

/// Two human seats on the standard layout
pub fn standard_game() -> Game {
    Game::new(Player::human(Color::White), Player::human(Color::Black)).unwrap()
}

/// Play a list of `"e2e4"`-style moves, alternating from white
pub fn play_line(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let (from, to) = text.split_at(2);
        let color = game.side_to_move();
        game.make_move(color, sq(from), sq(to))
            .unwrap_or_else(|err| panic!("{text} rejected: {err}"));
    }
}
