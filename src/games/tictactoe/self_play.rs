//! Engine-versus-engine games.
//!
//! The human side is driven by the same engine searching the mirrored
//! board, so both sides play with the agent's own evaluation.

use super::{Board, Cell, Difficulty, Engine, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which side moves first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// Automated player (O).
    #[default]
    Agent,
    /// Human player (X).
    Player,
}

impl Side {
    fn mark(self) -> Cell {
        match self {
            Side::Agent => Cell::Agent,
            Side::Player => Cell::Player,
        }
    }

    fn other(self) -> Self {
        match self {
            Side::Agent => Side::Player,
            Side::Player => Side::Agent,
        }
    }
}

/// A finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Cells played, in order.
    pub moves: Vec<usize>,
    /// Final position.
    pub board: Board,
    /// Final classification.
    pub outcome: Outcome,
}

/// Plays one game from an empty board.
#[instrument(skip(engine))]
pub fn self_play(
    engine: &mut Engine,
    agent: Difficulty,
    player: Difficulty,
    first: Side,
) -> GameRecord {
    let mut board = Board::new();
    let mut moves = Vec::with_capacity(9);
    let mut to_move = first;

    loop {
        let outcome = Outcome::classify(&board);
        if outcome.is_game_over() {
            debug!(winner = %outcome.winner, plies = moves.len(), "Game over");
            return GameRecord {
                moves,
                board,
                outcome,
            };
        }

        let chosen = match to_move {
            Side::Agent => engine.choose(&board, agent),
            Side::Player => engine.choose(&board.mirrored(), player),
        };
        // A board that is neither won nor full always has an empty cell.
        let Some(mv) = chosen else {
            return GameRecord {
                moves,
                board,
                outcome,
            };
        };

        board.cells_mut()[mv] = to_move.mark();
        moves.push(mv);
        to_move = to_move.other();
    }
}
