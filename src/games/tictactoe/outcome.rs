//! Game result classification.

use super::rules::{is_full, winning_line};
use super::{Board, Cell, Line};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who, if anyone, has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Winner {
    /// The automated player completed a line.
    #[serde(rename = "O")]
    #[display("O")]
    Agent,
    /// The human player completed a line.
    #[serde(rename = "X")]
    #[display("X")]
    Player,
    /// Board full with no line completed.
    #[serde(rename = "draw")]
    #[display("draw")]
    Draw,
    /// Game still open.
    #[serde(rename = "none")]
    #[display("none")]
    InProgress,
}

/// Classification of a board, with the line to highlight on a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Result of the game so far.
    pub winner: Winner,
    /// Completed line, present only when someone won.
    pub winning_line: Option<Line>,
}

impl Outcome {
    /// Classifies a board. An agent line takes precedence over a human line.
    #[instrument(skip(board), fields(board = %board))]
    pub fn classify(board: &Board) -> Self {
        if let Some(line) = winning_line(board, Cell::Agent) {
            return Self::won(Winner::Agent, line);
        }
        if let Some(line) = winning_line(board, Cell::Player) {
            return Self::won(Winner::Player, line);
        }
        let winner = if is_full(board) {
            Winner::Draw
        } else {
            Winner::InProgress
        };
        Self {
            winner,
            winning_line: None,
        }
    }

    fn won(winner: Winner, line: Line) -> Self {
        Self {
            winner,
            winning_line: Some(line),
        }
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.winner != Winner::InProgress
    }
}
