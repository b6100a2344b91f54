//! Minimax Othello Engine
//!
//! Fixed-depth minimax with alpha-beta pruning and a disc-count evaluation.
//! Root moves that tie on the best score are broken uniformly at random.

pub mod search;

use othello_core::{Board, Engine, HeuristicGrid, SearchLimits, SearchResult, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use search::{best_move, best_of, next_to_move, EvalMode, RootChoice, SearchOutcome, Searcher};

/// Othello engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search to a fixed depth with alpha-beta pruning
/// - White-minus-black disc count at the leaves (or positional weights when
///   built with [`EvalMode::Positional`])
/// - A uniform random pick among equally scored root moves
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
    /// Positional weights, recomputed at every simulated ply
    grid: HeuristicGrid,
    eval: EvalMode,
    rng: StdRng,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Engine with a fixed tie-break sequence, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            nodes: 0,
            grid: HeuristicGrid::new(),
            eval: EvalMode::default(),
            rng,
        }
    }

    /// Switches the leaf evaluation.
    pub fn with_eval(mut self, eval: EvalMode) -> Self {
        self.eval = eval;
        self
    }

    pub fn eval_mode(&self) -> EvalMode {
        self.eval
    }

    /// The heuristic grid for the board of the last search.
    pub fn grid(&self) -> &HeuristicGrid {
        &self.grid
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &mut Board, side: Side, limits: SearchLimits) -> SearchResult {
        let outcome = best_move(board, side, limits.max_depth, self.eval, &mut self.grid, &mut self.rng);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move.map(|(sq, _)| sq),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.max_depth,
            nodes: self.nodes,
            candidates: outcome.candidates,
        }
    }

    fn name(&self) -> &str {
        match self.eval {
            EvalMode::PieceCount => "Minimax v1.0",
            EvalMode::Positional => "Minimax Positional v1.0",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.grid = HeuristicGrid::new();
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
