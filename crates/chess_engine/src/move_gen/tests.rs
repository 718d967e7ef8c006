//! Test suite for archetype movement rules
//!
//! These tests exercise the geometry layer only: no king-safety filtering and
//! no turn order.
//!
//! # Test Organization
//!
//! - `test_pawn_*` - Pawn movement (forward, double-move, capture, en passant)
//! - `test_knight_*` - Knight L-shaped movement
//! - `test_bishop_*` - Diagonal movement and path blocking
//! - `test_rook_*` - Straight-line movement and path blocking
//! - `test_queen_*` - Queen combined straight-line and diagonal movement
//! - `test_king_*` - King single-square movement
//! - `test_shared_*` - Rules applied before any archetype

use super::*;
use crate::types::Piece;

fn loc(x: i32, y: i32) -> BoardLocation {
    BoardLocation::new(x, y).unwrap()
}

/// Build a board from `(piece_type, color, (x, y))` tuples
///
/// # Example
/// ```ignore
/// let board = create_test_board(&[
///     (PieceType::Pawn, Color::White, (1, 4)),
///     (PieceType::Rook, Color::Black, (7, 4)),
/// ]);
/// ```
fn create_test_board(pieces: &[(PieceType, Color, (i32, i32))]) -> Board {
    let mut board = Board::empty();
    for &(piece_type, color, (x, y)) in pieces {
        board.place(piece_type, color, loc(x, y));
    }
    board
}

fn mark_moved(board: &mut Board, at: (i32, i32)) {
    if let Some(piece) = board.piece_at_mut(loc(at.0, at.1)) {
        piece.has_moved = true;
    }
}

fn can_move(board: &Board, from: (i32, i32), to: (i32, i32)) -> bool {
    can_piece_move(board, loc(from.0, from.1), loc(to.0, to.1), None)
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_forward_one() {
    //! White advances toward increasing y, black toward decreasing y
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, (3, 3)),
        (PieceType::Pawn, Color::Black, (5, 5)),
    ]);

    assert!(can_move(&board, (3, 3), (3, 4)), "White pawn should step up");
    assert!(!can_move(&board, (3, 3), (3, 2)), "White pawn cannot retreat");
    assert!(can_move(&board, (5, 5), (5, 4)), "Black pawn should step down");
    assert!(!can_move(&board, (5, 5), (5, 6)), "Black pawn cannot retreat");
}

#[test]
fn test_pawn_double_move_from_start() {
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, (4, 1)),
        (PieceType::Pawn, Color::Black, (3, 6)),
    ]);

    assert!(can_move(&board, (4, 1), (4, 3)), "White double step from rank 2");
    assert!(can_move(&board, (3, 6), (3, 4)), "Black double step from rank 7");
    assert!(!can_move(&board, (4, 1), (4, 4)), "Never three squares");
}

#[test]
fn test_pawn_double_move_requires_unmoved() {
    //! A pawn that has moved loses its double step even if it returns to its
    //! starting rank by some board edit
    let mut board = create_test_board(&[(PieceType::Pawn, Color::White, (4, 1))]);
    mark_moved(&mut board, (4, 1));

    assert!(!can_move(&board, (4, 1), (4, 3)));
    assert!(can_move(&board, (4, 1), (4, 2)));
}

#[test]
fn test_pawn_double_move_off_start_rank() {
    let board = create_test_board(&[(PieceType::Pawn, Color::White, (4, 3))]);
    assert!(!can_move(&board, (4, 3), (4, 5)));
}

#[test]
fn test_pawn_blocked() {
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, (4, 1)),
        (PieceType::Knight, Color::Black, (4, 2)),
        (PieceType::Pawn, Color::White, (2, 1)),
        (PieceType::Knight, Color::Black, (2, 3)),
    ]);

    assert!(!can_move(&board, (4, 1), (4, 2)), "Pawns never capture forward");
    assert!(!can_move(&board, (4, 1), (4, 3)), "Intermediate square blocks");
    assert!(can_move(&board, (2, 1), (2, 2)));
    assert!(!can_move(&board, (2, 1), (2, 3)), "Occupied destination blocks");
}

#[test]
fn test_pawn_diagonal_capture() {
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, (3, 3)),
        (PieceType::Pawn, Color::Black, (4, 4)),
        (PieceType::Pawn, Color::White, (2, 4)),
    ]);

    assert!(can_move(&board, (3, 3), (4, 4)), "Capture opposing piece");
    assert!(!can_move(&board, (3, 3), (2, 4)), "Cannot capture own piece");
    assert!(can_move(&board, (4, 4), (3, 3)), "Black captures toward lower y");
}

#[test]
fn test_pawn_diagonal_to_empty_square() {
    let board = create_test_board(&[(PieceType::Pawn, Color::White, (3, 3))]);
    assert!(!can_move(&board, (3, 3), (4, 4)));
    assert!(!can_move(&board, (3, 3), (2, 4)));
}

#[test]
fn test_pawn_en_passant() {
    //! Black pawn has just double-stepped from (3,6) to (3,4), next to the
    //! white pawn on (4,4)
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, (4, 4)),
        (PieceType::Pawn, Color::Black, (3, 4)),
    ]);
    let window = EnPassant::after_double_step(loc(3, 6), loc(3, 4));

    assert!(can_piece_move(&board, loc(4, 4), loc(3, 5), window));
    assert!(
        !can_piece_move(&board, loc(4, 4), loc(3, 5), None),
        "Without the window the diagonal is an empty square"
    );
}

#[test]
fn test_pawn_en_passant_requires_adjacent_capturer() {
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, (5, 4)),
        (PieceType::Pawn, Color::Black, (3, 4)),
    ]);
    let window = EnPassant::after_double_step(loc(3, 6), loc(3, 4));

    assert!(!can_piece_move(&board, loc(5, 4), loc(4, 5), window));
}

#[test]
fn test_pawn_en_passant_only_against_pawns() {
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, (4, 4)),
        (PieceType::Rook, Color::Black, (3, 4)),
    ]);
    let window = Some(EnPassant {
        target: loc(3, 5),
        victim: loc(3, 4),
    });

    assert!(!can_piece_move(&board, loc(4, 4), loc(3, 5), window));
}

// ============================================================================
// Knight Movement Tests
// ============================================================================

#[test]
fn test_knight_all_eight_moves() {
    let board = create_test_board(&[(PieceType::Knight, Color::White, (3, 4))]);

    let mut expected = vec![
        loc(1, 3),
        loc(1, 5),
        loc(2, 2),
        loc(2, 6),
        loc(4, 2),
        loc(4, 6),
        loc(5, 3),
        loc(5, 5),
    ];
    expected.sort_by_key(|l| l.index());

    assert_eq!(get_possible_moves(&board, loc(3, 4), None), expected);
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = create_test_board(&[
        (PieceType::Knight, Color::White, (1, 0)),
        (PieceType::Pawn, Color::White, (0, 1)),
        (PieceType::Pawn, Color::White, (1, 1)),
        (PieceType::Pawn, Color::White, (2, 1)),
    ]);

    assert!(can_move(&board, (1, 0), (2, 2)));
    assert!(can_move(&board, (1, 0), (0, 2)));
    assert!(can_move(&board, (1, 0), (3, 1)));
}

#[test]
fn test_knight_corner_moves() {
    let board = create_test_board(&[(PieceType::Knight, Color::Black, (0, 0))]);
    assert_eq!(
        get_possible_moves(&board, loc(0, 0), None),
        vec![loc(2, 1), loc(1, 2)]
    );
}

// ============================================================================
// Diagonal (Bishop) Movement Tests
// ============================================================================

#[test]
fn test_bishop_diagonal_moves() {
    let board = create_test_board(&[(PieceType::Bishop, Color::White, (3, 3))]);

    assert!(can_move(&board, (3, 3), (7, 7)));
    assert!(can_move(&board, (3, 3), (0, 0)));
    assert!(can_move(&board, (3, 3), (0, 6)));
    assert!(can_move(&board, (3, 3), (6, 0)));
    assert!(!can_move(&board, (3, 3), (3, 6)), "Bishop cannot move straight");
}

#[test]
fn test_bishop_blocked_path() {
    let board = create_test_board(&[
        (PieceType::Bishop, Color::White, (2, 0)),
        (PieceType::Pawn, Color::Black, (4, 2)),
    ]);

    assert!(can_move(&board, (2, 0), (4, 2)), "Capture the blocker");
    assert!(!can_move(&board, (2, 0), (5, 3)), "Cannot pass the blocker");
}

#[test]
fn test_bishop_move_count_from_centre() {
    let board = create_test_board(&[(PieceType::Bishop, Color::White, (3, 3))]);
    assert_eq!(get_possible_moves(&board, loc(3, 3), None).len(), 13);
}

// ============================================================================
// Straight-Line (Rook) Movement Tests
// ============================================================================

#[test]
fn test_rook_full_file() {
    let board = create_test_board(&[(PieceType::Rook, Color::White, (0, 0))]);

    assert!(can_move(&board, (0, 0), (0, 7)));
    assert!(can_move(&board, (0, 0), (7, 0)));
    assert!(!can_move(&board, (0, 0), (1, 1)), "Rook cannot move diagonally");
}

#[test]
fn test_rook_blocked_path() {
    let board = create_test_board(&[
        (PieceType::Rook, Color::White, (0, 0)),
        (PieceType::Pawn, Color::White, (0, 3)),
        (PieceType::Pawn, Color::Black, (4, 0)),
    ]);

    assert!(can_move(&board, (0, 0), (0, 2)));
    assert!(!can_move(&board, (0, 0), (0, 3)), "Own piece on destination");
    assert!(!can_move(&board, (0, 0), (0, 5)), "Own piece in the way");
    assert!(can_move(&board, (0, 0), (4, 0)), "Capture on the rank");
    assert!(!can_move(&board, (0, 0), (6, 0)), "Captured piece still blocks");
}

#[test]
fn test_rook_move_count_on_empty_board() {
    let board = create_test_board(&[(PieceType::Rook, Color::Black, (4, 4))]);
    assert_eq!(get_possible_moves(&board, loc(4, 4), None).len(), 14);
}

// ============================================================================
// Queen Movement Tests
// ============================================================================

#[test]
fn test_queen_combines_archetypes() {
    let board = create_test_board(&[(PieceType::Queen, Color::White, (3, 3))]);

    assert!(can_move(&board, (3, 3), (3, 7)));
    assert!(can_move(&board, (3, 3), (7, 7)));
    assert!(!can_move(&board, (3, 3), (5, 4)), "Queen cannot jump like a knight");
    assert_eq!(get_possible_moves(&board, loc(3, 3), None).len(), 27);
}

#[test]
fn test_queen_helper_matches_archetypes() {
    let board = create_test_board(&[
        (PieceType::Queen, Color::White, (3, 3)),
        (PieceType::Pawn, Color::White, (5, 5)),
        (PieceType::Pawn, Color::Black, (3, 6)),
    ]);

    for to in BoardLocation::all() {
        let from = loc(3, 3);
        let friendly = board.color_at(to) == Some(Color::White);
        let helper = to != from && !friendly && queen::is_valid_queen_move(&board, from, to);
        assert_eq!(
            helper,
            can_piece_move(&board, from, to, None),
            "Queen rule disagrees on {to}"
        );
    }
}

// ============================================================================
// King Movement Tests
// ============================================================================

#[test]
fn test_king_single_square() {
    let board = create_test_board(&[(PieceType::King, Color::White, (4, 4))]);

    assert_eq!(get_possible_moves(&board, loc(4, 4), None).len(), 8);
    assert!(!can_move(&board, (4, 4), (4, 6)));
    assert!(!can_move(&board, (4, 4), (6, 4)), "Castling is not an archetype move");
}

#[test]
fn test_king_edge_moves() {
    let board = create_test_board(&[(PieceType::King, Color::Black, (0, 7))]);
    assert_eq!(get_possible_moves(&board, loc(0, 7), None).len(), 3);
}

// ============================================================================
// Shared Rules
// ============================================================================

#[test]
fn test_shared_no_null_move() {
    let board = create_test_board(&[(PieceType::Queen, Color::White, (3, 3))]);
    for movement in [
        Movement::StraightLine,
        Movement::Diagonal,
        Movement::Knight,
        Movement::King,
        Movement::Pawn,
    ] {
        assert!(!movement.can_move(&board, Color::White, loc(3, 3), loc(3, 3), None));
    }
}

#[test]
fn test_shared_empty_source() {
    let board = Board::empty();
    assert!(!can_move(&board, (0, 0), (0, 1)));
    assert!(get_possible_moves(&board, loc(0, 0), None).is_empty());
}

#[test]
fn test_shared_archetypes_per_piece() {
    assert_eq!(PieceType::Queen.movements().len(), 2);
    for piece_type in [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::King,
    ] {
        assert_eq!(piece_type.movements().len(), 1);
    }
}

#[test]
fn test_shared_standard_opening_moves() {
    //! From the initial layout only pawns and knights can move
    let board = Board::standard();
    let movable: Vec<Piece> = board
        .pieces_of(Color::White)
        .filter(|(from, _)| !get_possible_moves(&board, *from, None).is_empty())
        .map(|(_, piece)| piece)
        .collect();

    assert_eq!(movable.len(), 10);
    assert!(movable
        .iter()
        .all(|p| matches!(p.piece_type, PieceType::Pawn | PieceType::Knight)));
}
