//! Play Othello against the computer.
//!
//! You are black and move first. Enter squares as a column letter and a row
//! number, e.g. `d3`.

mod session;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use minimax_engine::{EvalMode, MinimaxEngine};
use othello_core::{Engine, Game, SearchLimits, DEFAULT_MAX_DEPTH};
use random_engine::RandomEngine;
use std::io;
use tracing_subscriber::EnvFilter;

use session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Minimax on disc count
    Minimax,
    /// Minimax on positional weights
    Positional,
    /// Uniformly random moves
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Play Othello against the computer")]
struct Cli {
    /// Computer opponent
    #[arg(short, long, value_enum, default_value_t = Opponent::Minimax)]
    opponent: Opponent,
    /// Search depth for the minimax opponents
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,
    /// Seed for the computer's random choices
    #[arg(short, long)]
    seed: Option<u64>,
}

fn build_engine(cli: &Cli) -> Box<dyn Engine> {
    let minimax = |eval| {
        let engine = match cli.seed {
            Some(seed) => MinimaxEngine::with_seed(seed),
            None => MinimaxEngine::new(),
        };
        Box::new(engine.with_eval(eval)) as Box<dyn Engine>
    };
    match cli.opponent {
        Opponent::Minimax => minimax(EvalMode::PieceCount),
        Opponent::Positional => minimax(EvalMode::Positional),
        Opponent::Random => Box::new(match cli.seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        }),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut engine = build_engine(&cli);
    println!("You are black (B), {} plays white (W).", engine.name());

    let mut session = Session::new(Game::new(), engine.as_mut(), SearchLimits::depth(cli.depth));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    if session.run(&mut input, &mut stdout)?.is_none() {
        println!("Bye.");
    }
    Ok(())
}
