//! Game rules for tic-tac-toe.
//!
//! Pure functions answering whether a board is won, full or open, and
//! which moves remain. Rules are separated from board storage so the
//! search engine and the turn boundary can share them.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::available_moves;
pub use win::{is_winner, winning_line};
