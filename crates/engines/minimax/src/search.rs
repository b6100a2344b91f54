//! Minimax search with alpha-beta pruning

use othello_core::{
    board_score, find_available, has_available, positional_score, Board, HeuristicGrid, Side, Square,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

pub const NEG_INF: i32 = i32::MIN;
pub const INF: i32 = i32::MAX;

/// What the search scores at its leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalMode {
    /// White discs minus black discs. The heuristic grid is still recomputed
    /// at every ply but never read.
    #[default]
    PieceCount,
    /// Positional weights from the heuristic grid, white minus black.
    Positional,
}

/// Whose turn it is after `mover` has played: the opponent if it can move,
/// otherwise `mover` again.
pub fn next_to_move(board: &Board, mover: Side) -> Side {
    if has_available(board, mover.opponent()) {
        mover.opponent()
    } else {
        mover
    }
}

/// Root moves sharing the extremal score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootChoice {
    pub value: i32,
    pub tied: Vec<Square>,
}

/// One search over a borrowed board. The heuristic grid is kept current at
/// every simulated ply.
pub struct Searcher<'g> {
    grid: &'g mut HeuristicGrid,
    max_depth: u8,
    eval: EvalMode,
    /// Number of moves simulated so far
    pub nodes: u64,
}

impl<'g> Searcher<'g> {
    pub fn new(grid: &'g mut HeuristicGrid, max_depth: u8, eval: EvalMode) -> Self {
        Self {
            grid,
            max_depth,
            eval,
            nodes: 0,
        }
    }

    fn leaf_score(&self, board: &Board) -> i32 {
        match self.eval {
            EvalMode::PieceCount => board_score(board),
            EvalMode::Positional => positional_score(board, &*self.grid),
        }
    }

    /// Value of the position with `side` to move, `depth` plies below the root.
    ///
    /// Nodes deeper than the depth limit, and nodes whose side to move has no
    /// legal move, are scored directly. The latter does not hand the turn to
    /// the opponent; passes are only applied after a move has been made.
    pub fn minimax(&mut self, board: &mut Board, depth: u8, side: Side, mut alpha: i32, mut beta: i32) -> i32 {
        if depth > self.max_depth {
            return self.leaf_score(board);
        }
        let moves = find_available(board, side);
        if moves.is_empty() {
            return self.leaf_score(board);
        }

        let maximizing = side.is_maximizing();
        let mut best = if maximizing { NEG_INF } else { INF };

        for mv in &moves {
            self.nodes += 1;
            let value = {
                let mut scoped = board.scoped(mv, side);
                self.grid.update(&scoped);
                let next = next_to_move(&scoped, side);
                self.minimax(&mut scoped, depth + 1, next, alpha, beta)
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
                if alpha >= beta {
                    break; // Beta cutoff
                }
            } else {
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
        }

        best
    }

    /// Scores every legal root move of `side`. Each one is searched with a
    /// full window.
    pub fn root_values(&mut self, board: &mut Board, side: Side) -> Vec<(Square, i32)> {
        let moves = find_available(board, side);
        let mut values = Vec::with_capacity(moves.len());

        for mv in &moves {
            self.nodes += 1;
            let mut scoped = board.scoped(mv, side);
            let next = next_to_move(&scoped, side);
            self.grid.update(&scoped);
            let value = self.minimax(&mut scoped, 0, next, NEG_INF, INF);
            values.push((mv.square, value));
        }

        values
    }
}

/// Keeps every root move that reaches the best value for `side`: the maximum
/// for white, the minimum for black.
pub fn best_of(values: &[(Square, i32)], side: Side) -> Option<RootChoice> {
    let scores = values.iter().map(|&(_, v)| v);
    let value = if side.is_maximizing() {
        scores.max()?
    } else {
        scores.min()?
    };
    let tied = values
        .iter()
        .filter(|&&(_, v)| v == value)
        .map(|&(sq, _)| sq)
        .collect();
    Some(RootChoice { value, tied })
}

/// Result from best_move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen square and its value (None if no legal moves exist)
    pub best_move: Option<(Square, i32)>,
    /// Number of root moves that shared the best value
    pub candidates: usize,
    /// Nodes searched
    pub nodes: u64,
}

/// Searches every root move, then draws uniformly among the best ones.
///
/// The board is borrowed for the whole search and is left exactly as it was;
/// the grid is left matching it.
pub fn best_move<R: Rng + ?Sized>(
    board: &mut Board,
    side: Side,
    max_depth: u8,
    eval: EvalMode,
    grid: &mut HeuristicGrid,
    rng: &mut R,
) -> SearchOutcome {
    let mut searcher = Searcher::new(grid, max_depth, eval);
    let values = searcher.root_values(board, side);
    let nodes = searcher.nodes;
    grid.update(board);

    let Some(choice) = best_of(&values, side) else {
        debug!(%side, "no legal move");
        return SearchOutcome {
            best_move: None,
            candidates: 0,
            nodes,
        };
    };

    let picked = choice.tied.choose(rng).copied();
    debug!(
        %side,
        nodes,
        value = choice.value,
        candidates = choice.tied.len(),
        "search finished"
    );

    SearchOutcome {
        best_move: picked.map(|sq| (sq, choice.value)),
        candidates: choice.tied.len(),
        nodes,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
