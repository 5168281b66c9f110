//! Move selection for the automated player.

use super::rules::available_moves;
use super::difficulty::MEDIUM_DEPTH;
use super::search::Minimax;
use super::{Board, Cell, Difficulty};
use crate::{ConfigError, EngineConfig, InvalidInput};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

/// Picks moves for the automated player.
///
/// Holds only configuration and a random source; boards are borrowed
/// for a single call and never retained.
#[derive(Debug, Clone)]
pub struct Engine {
    medium_depth: usize,
    rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            medium_depth: MEDIUM_DEPTH,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Engine {
    /// Creates an engine from configuration.
    ///
    /// Seeds the random source from the config when a seed is set,
    /// from OS entropy otherwise. Fails on an invalid config, however it
    /// was built.
    #[instrument(skip(config), fields(medium_depth = config.medium_depth(), seed = ?config.seed()))]
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            medium_depth: *config.medium_depth(),
            rng,
        })
    }

    /// Creates an engine with default settings and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            medium_depth: MEDIUM_DEPTH,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Searcher used for a difficulty, `None` for the random tier.
    pub fn searcher(&self, difficulty: Difficulty) -> Option<Minimax> {
        match difficulty {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(Minimax::with_depth_limit(self.medium_depth)),
            Difficulty::Hard => Some(Minimax::full()),
        }
    }

    /// Selects a move for the agent on a raw cell sequence.
    ///
    /// Fails if `cells` is not exactly 9 long. Returns `Ok(None)` when no
    /// empty cell is left.
    #[instrument(skip(self, cells), fields(len = cells.len()))]
    pub fn select_move(
        &mut self,
        cells: &[Cell],
        difficulty: Difficulty,
    ) -> Result<Option<usize>, InvalidInput> {
        let board = Board::try_from(cells)?;
        Ok(self.choose(&board, difficulty))
    }

    /// Selects a move for the agent on a board.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn choose(&mut self, board: &Board, difficulty: Difficulty) -> Option<usize> {
        let moves = available_moves(board);
        if moves.is_empty() {
            debug!("No moves available");
            return None;
        }

        let chosen = match self.searcher(difficulty) {
            None => moves.choose(&mut self.rng).copied(),
            Some(minimax) => {
                let outcome = minimax.search(board);
                match outcome.best_move {
                    Some(mv) => Some(mv),
                    None => {
                        warn!(score = outcome.score, "Search found no move, picking at random");
                        moves.choose(&mut self.rng).copied()
                    }
                }
            }
        };

        debug!(%difficulty, ?chosen, "Move selected");
        chosen
    }
}

/// Selects a move with a default engine.
///
/// Convenience for one-off calls; use [`Engine`] to reuse a seeded
/// random source.
pub fn select_move(cells: &[Cell], difficulty: Difficulty) -> Result<Option<usize>, InvalidInput> {
    Engine::default().select_move(cells, difficulty)
}
