pub mod board;
pub mod capture;
pub mod error;
pub mod eval;
pub mod game;
pub mod heuristic;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use capture::*;
pub use error::OthelloError;
pub use eval::*;
pub use game::*;
pub use heuristic::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move selector (minimax, random, ...)
// =============================================================================

/// Default search horizon: plies 0 through 5 expand, ply 6 is scored.
pub const DEFAULT_MAX_DEPTH: u8 = 5;

/// How far an engine may look ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Deepest ply that is still expanded; deeper nodes are scored directly.
    pub max_depth: u8,
}

impl SearchLimits {
    pub fn depth(max_depth: u8) -> Self {
        Self { max_depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_MAX_DEPTH)
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen square (None if the side has no legal move)
    pub best_move: Option<Square>,
    /// Score of the chosen move, white minus black
    pub score: i32,
    /// Depth limit the search ran with
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// How many root moves shared the best score
    pub candidates: usize,
}

/// Trait that all Othello engines implement.
///
/// Engines borrow the board mutably for the duration of one search and must
/// hand it back exactly as they found it.
pub trait Engine: Send {
    /// Choose a move for `side` on `board`.
    fn search(&mut self, board: &mut Board, side: Side, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "othello-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
