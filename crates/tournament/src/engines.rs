//! Engine construction from command line names

use minimax_engine::{EvalMode, MinimaxEngine};
use othello_core::Engine;
use random_engine::RandomEngine;

use crate::error::TournamentError;

/// Engine names accepted by [`create_engine`].
pub const ENGINE_NAMES: [&str; 3] = ["minimax", "positional", "random"];

/// Maps a name or alias (any case) to its entry in [`ENGINE_NAMES`].
pub fn canonical_engine_name(name: &str) -> Result<&'static str, TournamentError> {
    match name.to_lowercase().as_str() {
        "minimax" | "mm" => Ok("minimax"),
        "positional" | "pos" => Ok("positional"),
        "random" | "rand" => Ok("random"),
        _ => Err(TournamentError::UnknownEngine(name.to_string())),
    }
}

/// The challenger's canonical name and every other listed engine.
pub fn gauntlet_opponents(challenger: &str) -> Result<(&'static str, Vec<&'static str>), TournamentError> {
    let challenger = canonical_engine_name(challenger)?;
    let opponents = ENGINE_NAMES
        .into_iter()
        .filter(|&name| name != challenger)
        .collect();
    Ok((challenger, opponents))
}

/// Builds an engine from its name. With a seed the engine's random choices
/// are reproducible.
pub fn create_engine(name: &str, seed: Option<u64>) -> Result<Box<dyn Engine>, TournamentError> {
    let minimax = |eval| {
        let engine = match seed {
            Some(seed) => MinimaxEngine::with_seed(seed),
            None => MinimaxEngine::new(),
        };
        Box::new(engine.with_eval(eval)) as Box<dyn Engine>
    };
    Ok(match canonical_engine_name(name)? {
        "minimax" => minimax(EvalMode::PieceCount),
        "positional" => minimax(EvalMode::Positional),
        _ => {
            let engine = match seed {
                Some(seed) => RandomEngine::with_seed(seed),
                None => RandomEngine::new(),
            };
            Box::new(engine) as Box<dyn Engine>
        }
    })
}
