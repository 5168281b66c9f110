//! Minimax search with alpha-beta pruning.
//!
//! The automated player ([`Cell::Agent`]) maximizes and the human
//! ([`Cell::Player`]) minimizes. Terminal positions score `10 - depth`
//! for an agent win and `depth - 10` for a human win, so faster wins and
//! slower losses are preferred. Positions reached at the depth limit are
//! scored by [`heuristic`].
//!
//! Candidates are tried in ascending index order at every ply and a
//! candidate only replaces the current best on a strictly better score,
//! so ties always go to the lowest index. With that rule the pruned and
//! the exhaustive search pick the same move.

use super::difficulty::FULL_DEPTH;
use super::rules::{available_moves, is_full, is_winner};
use super::{Board, Cell, LINES};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of an agent win found at the root.
pub const WIN_SCORE: i32 = 10;

/// Bound larger than any reachable score.
const INFINITY: i32 = 10_000;

/// Result of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move, `None` if the root was terminal.
    pub best_move: Option<usize>,
    /// Minimax value of the root position.
    pub score: i32,
    /// Positions visited.
    pub nodes: u64,
}

/// Minimax searcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    depth_limit: usize,
    pruning: bool,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::full()
    }
}

impl Minimax {
    /// Search to the end of the game with alpha-beta pruning.
    pub fn full() -> Self {
        Self::with_depth_limit(FULL_DEPTH)
    }

    /// Search at most `depth_limit` plies, then fall back to the heuristic.
    pub fn with_depth_limit(depth_limit: usize) -> Self {
        Self {
            depth_limit,
            pruning: true,
        }
    }

    /// Same search without alpha-beta cutoffs.
    pub fn without_pruning(self) -> Self {
        Self {
            pruning: false,
            ..self
        }
    }

    /// Depth limit in plies.
    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Whether alpha-beta cutoffs are applied.
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Searches `board` with the agent to move.
    ///
    /// Works on a private copy; the caller's board is never touched.
    #[instrument(skip(board), fields(board = %board))]
    pub fn search(&self, board: &Board) -> SearchOutcome {
        let mut work = *board;
        let mut nodes = 0;
        let (best_move, score) =
            self.minimax(&mut work, 0, -INFINITY, INFINITY, true, &mut nodes);
        debug_assert_eq!(&work, board, "search must restore every cell");
        debug!(?best_move, score, nodes, "Search finished");
        SearchOutcome {
            best_move,
            score,
            nodes,
        }
    }

    fn minimax(
        &self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> (Option<usize>, i32) {
        *nodes += 1;

        if let Some(score) = terminal_score(board, depth) {
            return (None, score);
        }
        if depth >= self.depth_limit {
            return (None, heuristic(board));
        }

        let mark = if maximizing { Cell::Agent } else { Cell::Player };
        let mut best_move = None;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in available_moves(board) {
            let score = {
                let mut placed = Placed::new(board, mv, mark);
                self.minimax(&mut placed, depth + 1, alpha, beta, !maximizing, nodes)
                    .1
            };

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        (best_move, best)
    }
}

/// A hypothetical mark that is removed again when dropped.
struct Placed<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Placed<'a> {
    fn new(board: &'a mut Board, index: usize, mark: Cell) -> Self {
        board.cells_mut()[index] = mark;
        Self { board, index }
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.cells_mut()[self.index] = Cell::Empty;
    }
}

/// Score of a finished game, `None` while play continues.
pub fn terminal_score(board: &Board, depth: usize) -> Option<i32> {
    let depth = depth as i32;
    if is_winner(board, Cell::Agent) {
        Some(WIN_SCORE - depth)
    } else if is_winner(board, Cell::Player) {
        Some(depth - WIN_SCORE)
    } else if is_full(board) {
        Some(0)
    } else {
        None
    }
}

/// Static evaluation for cut-off positions.
///
/// Every line holding agent marks and no human mark adds its agent mark
/// count; every line holding only human marks subtracts its human count.
pub fn heuristic(board: &Board) -> i32 {
    LINES
        .iter()
        .map(|line| {
            let count = |cell: Cell| {
                line.iter()
                    .filter(|&&i| board.get(i) == Some(cell))
                    .count() as i32
            };
            match (count(Cell::Agent), count(Cell::Player)) {
                (agent, 0) => agent,
                (0, player) => -player,
                _ => 0,
            }
        })
        .sum()
}
