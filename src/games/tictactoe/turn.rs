//! Request/response boundary for one automated turn.
//!
//! The caller sends the board after the human's move; the engine answers
//! with its own move and the resulting game state. Cell values are
//! sanitized here, so the rules and the search only ever see
//! [`Cell`] values.

use super::rules::{is_full, winning_line};
use super::{Board, Cell, Difficulty, Engine, Line, Outcome, Winner};
use crate::InvalidInput;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Board and difficulty as sent by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Raw cell values. Anything but `"X"` or `"O"` counts as empty.
    pub board: Vec<serde_json::Value>,
    /// Difficulty name; missing, unknown or non-string means hard.
    #[serde(default)]
    pub difficulty: Option<serde_json::Value>,
}

impl MoveRequest {
    /// Builds a request from a board.
    pub fn new(board: &Board, difficulty: Difficulty) -> Self {
        Self {
            board: board
                .symbols()
                .iter()
                .map(|s| serde_json::Value::from(*s))
                .collect(),
            difficulty: Some(serde_json::Value::from(difficulty.to_string())),
        }
    }

    /// Parses a JSON request body.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, InvalidInput> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sanitized board. Fails unless exactly 9 values were sent.
    #[instrument(skip(self), fields(len = self.board.len()))]
    pub fn sanitized_board(&self) -> Result<Board, InvalidInput> {
        let cells: Vec<Cell> = self.board.iter().map(Cell::sanitize).collect();
        Board::try_from(cells)
    }

    /// Requested difficulty, hard when missing, unknown or not a string.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_option(self.difficulty.as_ref().and_then(serde_json::Value::as_str))
    }
}

/// The engine's answer to a [`MoveRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// Cell the agent played, if it moved.
    pub ai_move: Option<usize>,
    /// Result after the agent's move.
    pub winner: Winner,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Line to highlight when someone won.
    pub winning_line: Option<Line>,
}

impl MoveResponse {
    fn finished(ai_move: Option<usize>, outcome: Outcome) -> Self {
        Self {
            ai_move,
            winner: outcome.winner,
            game_over: outcome.is_game_over(),
            winning_line: outcome.winning_line,
        }
    }
}

impl Engine {
    /// Plays the agent's turn for a client request.
    ///
    /// No move is made if the human has already won or the board is full.
    #[instrument(skip(self, request))]
    pub fn respond(&mut self, request: &MoveRequest) -> Result<MoveResponse, InvalidInput> {
        let mut board = request.sanitized_board()?;
        let difficulty = request.difficulty();

        if let Some(line) = winning_line(&board, Cell::Player) {
            info!("Human already won");
            return Ok(MoveResponse {
                ai_move: None,
                winner: Winner::Player,
                game_over: true,
                winning_line: Some(line),
            });
        }

        if is_full(&board) {
            info!("Board already full");
            return Ok(MoveResponse {
                ai_move: None,
                winner: Winner::Draw,
                game_over: true,
                winning_line: None,
            });
        }

        let ai_move = self.choose(&board, difficulty);
        if let Some(mv) = ai_move {
            board.set(mv, Cell::Agent)?;
        }

        let response = MoveResponse::finished(ai_move, Outcome::classify(&board));
        info!(
            %difficulty,
            ai_move = ?response.ai_move,
            winner = %response.winner,
            "Turn played"
        );
        Ok(response)
    }

    /// Parses a JSON request, plays the turn and serializes the answer.
    #[instrument(skip(self, json))]
    pub fn respond_json(&mut self, json: &str) -> Result<String, InvalidInput> {
        let request = MoveRequest::from_json(json)?;
        let response = self.respond(&request)?;
        Ok(serde_json::to_string(&response)?)
    }
}
