mod difficulty;
mod engine;
mod outcome;
pub mod rules;
pub mod search;
mod self_play;
mod turn;
mod types;

pub use difficulty::{Difficulty, FULL_DEPTH, MEDIUM_DEPTH};
pub use engine::{Engine, select_move};
pub use outcome::{Outcome, Winner};
pub use search::{Minimax, SearchOutcome};
pub use self_play::{GameRecord, Side, self_play};
pub use turn::{MoveRequest, MoveResponse};
pub use types::{Board, CELLS, Cell, LINES, Line};
