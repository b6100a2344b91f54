//! Random Move Othello Engine
//!
//! Picks uniformly among the legal moves of the side to play. Serves as the
//! baseline opponent in matches and as a quick sparring partner in the shell.

use othello_core::{find_available, Board, Engine, SearchLimits, SearchResult, Side, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};


/// Uniformly random legal square for `side`, or None when it has to pass.
pub fn random_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Square> {
    find_available(board, side).choose(rng).map(|mv| mv.square)
}

/// An Othello engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    nodes: u64,
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &mut Board, side: Side, _limits: SearchLimits) -> SearchResult {
        let best_move = random_move(board, side, &mut self.rng);
        self.nodes = 1;

        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: self.nodes,
            candidates: usize::from(best_move.is_some()),
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
