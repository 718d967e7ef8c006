//! Move ordering for alpha-beta pruning
//!
//! Tries the most promising moves first so cut-offs come early: captures by
//! MVV-LVA (most valuable victim, least valuable attacker), then promotions.
//! Quiet moves keep their enumeration order since the sort is stable.

use crate::board::Board;
use crate::constants::piece_value;
use crate::types::Move;
use std::cmp::Reverse;

fn move_score(board: &Board, mv: &Move) -> i32 {
    let mut score = 0;

    if let Some(victim) = board.piece_at(mv.to) {
        let attacker = board
            .piece_at(mv.from)
            .map(|piece| piece_value(piece.piece_type))
            .unwrap_or(0);
        score += piece_value(victim.piece_type) * 10 - attacker;
    }

    if let Some(piece_type) = mv.promotion {
        score += piece_value(piece_type);
    }

    score
}

/// Order moves for better alpha-beta pruning
pub(super) fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(move_score(board, mv)));
}
