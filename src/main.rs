//! Strictly Minimax - command-line front end
//!
//! Thin wrapper over the engine for scripting and manual play.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::collections::BTreeMap;
use std::io::Read;
use strictly_minimax::{
    Board, Difficulty, Engine, EngineConfig, MoveRequest, Side, Winner, self_play,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let mut engine = Engine::new(&config)?;

    match cli.command {
        Command::Move { board, difficulty } => {
            let difficulty = difficulty
                .map(|d| Difficulty::parse_lenient(&d))
                .unwrap_or(*config.default_difficulty());
            run_move(&mut engine, &board, difficulty)
        }
        Command::Respond => run_respond(&mut engine),
        Command::SelfPlay {
            agent,
            player,
            games,
            player_first,
        } => {
            let first = if player_first { Side::Player } else { Side::Agent };
            run_self_play(
                &mut engine,
                Difficulty::parse_lenient(&agent),
                Difficulty::parse_lenient(&player),
                games,
                first,
            )
        }
    }
}

/// Pick one move and print the response
#[instrument(skip(engine))]
fn run_move(engine: &mut Engine, board: &str, difficulty: Difficulty) -> Result<()> {
    let board = Board::parse(board)?;
    let response = engine.respond(&MoveRequest::new(&board, difficulty))?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Answer a JSON request read from stdin
#[instrument(skip(engine))]
fn run_respond(engine: &mut Engine) -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    println!("{}", engine.respond_json(&input)?);
    Ok(())
}

/// Play engine-versus-engine games and print a tally
#[instrument(skip(engine))]
fn run_self_play(
    engine: &mut Engine,
    agent: Difficulty,
    player: Difficulty,
    games: u32,
    first: Side,
) -> Result<()> {
    info!(%agent, %player, games, %first, "Starting self-play");

    let mut tally: BTreeMap<String, u32> = BTreeMap::new();
    for game in 1..=games {
        let record = self_play(engine, agent, player, first);
        println!("Game {} ({}): {:?}", game, record.outcome.winner, record.moves);
        println!("{}\n", record.board);
        let label = match record.outcome.winner {
            Winner::Agent => "agent",
            Winner::Player => "player",
            Winner::Draw | Winner::InProgress => "draw",
        };
        *tally.entry(label.to_string()).or_default() += 1;
    }

    for (label, count) in &tally {
        println!("{:>6}: {}", label, count);
    }
    Ok(())
}
