//! AI Search Integration Tests
//!
//! - Tactical sanity (mate in one, winning hanging material)
//! - Deterministic move choice
//! - Background search, commit and cancellation
//! - AI moves go through the regular game validation

mod common;

use chess_engine::constants::{is_mate_score, MATE_SCORE};
use chess_engine::{
    find_best_move, AiConfig, AiPlayer, Color, Game, GameState, MoveError, MoveOutcome, Player,
    Position, SearchStatus,
};
use common::{board, sq, standard_game};
use std::sync::atomic::AtomicBool;

fn back_rank_rows() -> [&'static str; 8] {
    [
        "- - - - - - - k",
        "- - - - - - p p",
        "- - - - - - - -",
        "- - - - - - - -",
        "- - - - - - - -",
        "- - - - - - - -",
        "- - - - - - - -",
        "R - - - - - K -",
    ]
}

#[test]
fn test_finds_back_rank_mate() {
    let position = Position::new(board(&back_rank_rows()), Color::White);
    let stop = AtomicBool::new(false);

    for depth in 1..=3 {
        let result = find_best_move(&position, &AiConfig::default().with_depth(depth), &stop)
            .expect("white has moves");
        assert_eq!(result.best_move.from, sq("a1"), "depth {depth}");
        assert_eq!(result.best_move.to, sq("a8"), "depth {depth}");
        assert_eq!(result.score, MATE_SCORE - 1);
        assert!(is_mate_score(result.score));
    }
}

#[test]
fn test_ai_player_delivers_mate_through_game() {
    let mut game = Game::with_board(
        board(&back_rank_rows()),
        Color::White,
        Player::Ai(AiPlayer::with_depth(Color::White, 2)),
        Player::human(Color::Black),
    )
    .unwrap();

    let outcome = game.play_ai_turn().unwrap();
    assert_eq!(
        outcome,
        Some(MoveOutcome::Completed(GameState::Checkmate(Color::Black)))
    );
    assert_eq!(game.play_ai_turn(), Err(MoveError::GameOver));
}

#[test]
fn test_takes_hanging_queen() {
    let b = board(&[
        "- - - - k - - -",
        "- - - - - - - -",
        "- - - - - - - -",
        "- - - q - - - -",
        "- - - - - - - -",
        "- - N - - - - -",
        "- - - - - - - -",
        "- - - - K - - -",
    ]);
    let position = Position::new(b, Color::White);
    let stop = AtomicBool::new(false);

    let result = find_best_move(&position, &AiConfig::default().with_depth(2), &stop).unwrap();
    assert_eq!(result.best_move.from, sq("c3"));
    assert_eq!(result.best_move.to, sq("d5"));
    assert!(result.score > 0);
}

#[test]
fn test_search_is_deterministic() {
    let position = Position::default();
    let stop = AtomicBool::new(false);
    let config = AiConfig::default().with_depth(2);

    let first = find_best_move(&position, &config, &stop).unwrap();
    let second = find_best_move(&position, &config, &stop).unwrap();
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn test_no_moves_no_result() {
    let b = board(&[
        "- - - - - - - k",
        "- - - - - Q - -",
        "- - - - - - - -",
        "- - - - - - - -",
        "- - - - - - - -",
        "- - - - - - - -",
        "- - - - - - - -",
        "K - - - - - - -",
    ]);
    let position = Position::new(b, Color::Black);
    let stop = AtomicBool::new(false);
    assert!(find_best_move(&position, &AiConfig::default(), &stop).is_none());
}

#[test]
fn test_ai_vs_ai_plays_legal_moves() {
    let mut game = Game::new(
        Player::Ai(AiPlayer::with_depth(Color::White, 1)),
        Player::Ai(AiPlayer::with_depth(Color::Black, 1)),
    )
    .unwrap();

    for _ in 0..16 {
        if game.is_over() {
            break;
        }
        let before = game.position().clone();
        game.play_ai_turn().unwrap();

        let record = *game.history().last().unwrap();
        assert!(before.validate_move(record.color, record.as_move()).is_ok());
    }
    assert!(game.ply() > 0);
}

#[test]
fn test_background_search_commit() {
    let ai = AiPlayer::with_depth(Color::White, 2);
    let mut game = Game::new(Player::Ai(ai), Player::human(Color::Black)).unwrap();

    let handle = ai.spawn_search(&game).unwrap();
    assert_eq!(handle.ply(), 0);
    let result = handle.wait().expect("search finishes");

    let outcome = ai.commit(&mut game, result).unwrap();
    assert!(matches!(outcome, MoveOutcome::Completed(GameState::Normal)));
    assert_eq!(game.ply(), 1);
}

#[test]
fn test_background_result_goes_stale() {
    let ai = AiPlayer::with_depth(Color::White, 1);
    let mut game = Game::new(Player::Ai(ai), Player::human(Color::Black)).unwrap();

    let handle = ai.spawn_search(&game).unwrap();
    let result = handle.wait().unwrap();

    // The seat moves some other way before the result is committed
    game.make_move(Color::White, sq("a2"), sq("a3")).unwrap();
    game.make_move(Color::Black, sq("a7"), sq("a6")).unwrap();

    assert_eq!(
        ai.commit(&mut game, result),
        Err(MoveError::StaleSearch {
            searched: 0,
            current: 2
        })
    );
    assert_eq!(game.ply(), 2);
}

#[test]
fn test_cancel_leaves_game_untouched() {
    let ai = AiPlayer::new(Color::White, AiConfig::default().with_depth(4));
    let game = Game::new(Player::Ai(ai), Player::human(Color::Black)).unwrap();
    let before = game.position().clone();

    let handle = ai.spawn_search(&game).unwrap();
    assert!(matches!(
        handle.poll(),
        SearchStatus::Searching | SearchStatus::Done(_)
    ));
    handle.cancel();

    assert_eq!(game.position(), &before);
    assert_eq!(game.ply(), 0);
}

#[test]
fn test_spawn_refused_off_turn() {
    let ai = AiPlayer::with_depth(Color::Black, 1);
    let game = Game::new(Player::human(Color::White), Player::Ai(ai)).unwrap();
    assert!(matches!(
        ai.spawn_search(&game),
        Err(MoveError::NotYourTurn {
            color: Color::Black
        })
    ));
}

#[test]
fn test_standard_game_helper_has_human_seats() {
    let mut game = standard_game();
    assert_eq!(game.play_ai_turn(), Ok(None));
}
