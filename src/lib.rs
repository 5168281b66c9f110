//! Strictly Minimax - tic-tac-toe move selection
//!
//! Picks a move for the automated player (`O`) against a human (`X`)
//! on a 3x3 board.
//!
//! # Architecture
//!
//! - **Rules**: pure predicates over a board (won, full, open cells)
//! - **Search**: minimax with alpha-beta pruning and depth-aware scoring
//! - **Engine**: difficulty dispatch (random, shallow, exhaustive)
//! - **Turn**: sanitizing request/response boundary for clients
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Cell, Difficulty, select_move};
//!
//! # fn example() -> Result<(), strictly_minimax::InvalidInput> {
//! let board = [
//!     Cell::Agent, Cell::Agent, Cell::Empty,
//!     Cell::Player, Cell::Player, Cell::Empty,
//!     Cell::Empty, Cell::Empty, Cell::Empty,
//! ];
//! assert_eq!(select_move(&board, Difficulty::Hard)?, Some(2));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Errors
pub use error::InvalidInput;

// Crate-level exports - Board oracle
pub use games::tictactoe::rules;
pub use games::tictactoe::rules::{available_moves, is_full, is_winner, winning_line};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELLS, Cell, Difficulty, Engine, FULL_DEPTH, GameRecord, LINES, Line, MEDIUM_DEPTH,
    Minimax, MoveRequest, MoveResponse, Outcome, SearchOutcome, Side, Winner, select_move,
    self_play,
};

// Crate-level exports - Search internals
pub use games::tictactoe::search::{heuristic, terminal_score};
