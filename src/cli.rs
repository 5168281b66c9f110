//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe move selection
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Minimax tic-tac-toe opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to engine config (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick the agent's move for a board and print the JSON response
    Move {
        /// Board as 9 characters: upper-case X (human), O (agent), anything else empty
        #[arg(short, long)]
        board: String,

        /// easy, medium or hard (unknown values mean hard)
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Read a JSON move request from stdin and print the JSON response
    Respond,

    /// Let the engine play against itself
    SelfPlay {
        /// Difficulty of the agent (O)
        #[arg(long, default_value = "hard")]
        agent: String,

        /// Difficulty of the simulated human (X)
        #[arg(long, default_value = "hard")]
        player: String,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Let the human side move first
        #[arg(long)]
        player_first: bool,
    },
}
