//! Tests for move selection across difficulty tiers.

use proptest::prelude::*;
use std::collections::HashSet;
use strum::IntoEnumIterator;
use strictly_minimax::{
    Board, Cell, Difficulty, Engine, Minimax, Side, Winner, available_moves, is_full, is_winner,
    select_move, self_play,
};

fn open_board(board: &Board) -> bool {
    !is_full(board) && !is_winner(board, Cell::Agent) && !is_winner(board, Cell::Player)
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![
        2 => Just(Cell::Empty),
        1 => Just(Cell::Player),
        1 => Just(Cell::Agent),
    ])
    .prop_map(Board::from_cells)
}

#[test]
fn test_takes_immediate_win() {
    let board = [
        Cell::Agent,
        Cell::Agent,
        Cell::Empty,
        Cell::Player,
        Cell::Player,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
    ];
    assert_eq!(select_move(&board, Difficulty::Hard).unwrap(), Some(2));
}

#[test]
fn test_prefers_win_over_block() {
    // Both sides threaten; winning at 2 beats blocking at 5
    let board = Board::parse("OO XX    ").unwrap();
    assert_eq!(select_move(board.cells(), Difficulty::Medium).unwrap(), Some(2));
}

#[test]
fn test_medium_opens_center_hard_opens_corner() {
    // Cut off at 3 plies the center's four lines outweigh a corner's three
    let board = Board::new();
    assert_eq!(select_move(board.cells(), Difficulty::Medium).unwrap(), Some(4));
    assert_eq!(select_move(board.cells(), Difficulty::Hard).unwrap(), Some(0));
}

#[test]
fn test_medium_and_hard_diverge_mid_game() {
    let board = Board::parse("O        ").unwrap();
    assert_eq!(select_move(board.cells(), Difficulty::Medium).unwrap(), Some(2));
    assert_eq!(select_move(board.cells(), Difficulty::Hard).unwrap(), Some(1));
}

#[test]
fn test_medium_search_is_depth_limited() {
    let board = Board::new();
    let medium = Minimax::with_depth_limit(3).search(&board);
    let hard = Minimax::full().search(&board);
    assert_eq!(medium.best_move, Some(4));
    assert_ne!(medium.score, hard.score);
    assert!(medium.nodes < hard.nodes);
}

#[test]
fn test_blocks_diagonal_threat() {
    let board = [
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Player,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Player,
    ];
    assert_eq!(select_move(&board, Difficulty::Hard).unwrap(), Some(0));
}

#[test]
fn test_blocks_column_threat() {
    let board = Board::parse("X  X   O ").unwrap();
    assert_eq!(select_move(board.cells(), Difficulty::Hard).unwrap(), Some(6));
}

#[test]
fn test_full_board_has_no_move() {
    let board = Board::parse("XOXOXXOXO").unwrap();
    for difficulty in Difficulty::iter() {
        assert_eq!(select_move(board.cells(), difficulty).unwrap(), None);
    }
}

#[test]
fn test_rejects_wrong_length() {
    let short = [Cell::Empty; 8];
    let err = select_move(&short, Difficulty::Hard).unwrap_err();
    assert!(err.message.contains("exactly 9"));

    let long = vec![Cell::Empty; 10];
    assert!(select_move(&long, Difficulty::Easy).is_err());
    assert!(select_move(&[], Difficulty::Medium).is_err());
}

#[test]
fn test_easy_covers_every_candidate() {
    let board = Board::parse("XOX OXO  ").unwrap();
    let moves = available_moves(&board);
    assert_eq!(moves, vec![3, 7, 8]);

    let mut engine = Engine::default();
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let mv = engine
            .select_move(board.cells(), Difficulty::Easy)
            .unwrap()
            .unwrap();
        assert!(moves.contains(&mv));
        seen.insert(mv);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_hard_self_play_always_draws() {
    let mut engine = Engine::seeded(0);
    for first in [Side::Agent, Side::Player] {
        let record = self_play(&mut engine, Difficulty::Hard, Difficulty::Hard, first);
        assert_eq!(record.outcome.winner, Winner::Draw, "first = {}", first);
        assert_eq!(record.moves.len(), 9);
    }
}

#[test]
fn test_medium_self_play_terminates() {
    let mut engine = Engine::seeded(5);
    let record = self_play(&mut engine, Difficulty::Medium, Difficulty::Medium, Side::Agent);
    assert!(record.outcome.is_game_over());
}

#[test]
fn test_hard_and_medium_are_deterministic() {
    let board = Board::parse("X   O    ").unwrap();
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        let first = Engine::seeded(1).choose(&board, difficulty);
        let second = Engine::seeded(2).choose(&board, difficulty);
        assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn prop_hard_move_is_legal(board in any_board()) {
        prop_assume!(open_board(&board));
        let mv = select_move(board.cells(), Difficulty::Hard).unwrap();
        let mv = mv.expect("open board must yield a move");
        prop_assert!(available_moves(&board).contains(&mv));
    }

    #[test]
    fn prop_pruning_matches_exhaustive(board in any_board()) {
        let pruned = Minimax::full().search(&board);
        let exhaustive = Minimax::full().without_pruning().search(&board);
        prop_assert_eq!(pruned.score, exhaustive.score);
        prop_assert_eq!(pruned.best_move, exhaustive.best_move);
        prop_assert!(pruned.nodes <= exhaustive.nodes);
    }

    #[test]
    fn prop_pruning_matches_exhaustive_at_cutoff(board in any_board()) {
        let pruned = Minimax::with_depth_limit(3).search(&board);
        let exhaustive = Minimax::with_depth_limit(3).without_pruning().search(&board);
        prop_assert_eq!(pruned.score, exhaustive.score);
        prop_assert_eq!(pruned.best_move, exhaustive.best_move);
    }

    #[test]
    fn prop_input_board_unchanged(board in any_board(), seed in any::<u64>()) {
        let cells = *board.cells();
        let mut engine = Engine::seeded(seed);
        for difficulty in Difficulty::iter() {
            engine.select_move(&cells, difficulty).unwrap();
            prop_assert_eq!(&cells, board.cells());
        }
    }
}
