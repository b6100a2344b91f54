//! A game in progress: board, turn order and the pass rule.

use tracing::debug;

use crate::{
    board::Board,
    capture::captures_at,
    error::OthelloError,
    movegen::{find_available, has_available},
    status::{GameOutcome, check_finished, find_winner},
    types::*,
};

/// What happens after a move has been played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The given side moves next.
    Next(Side),
    /// The opponent had no move, so the given side moves again.
    Pass(Side),
    /// Nobody can move any more.
    Over(GameOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub square: Square,
    pub flipped: usize,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Side,
    history: Vec<MoveRecord>,
    outcome: Option<GameOutcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard opening, black moves first.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::Black)
    }

    /// Starts from an arbitrary position. If `to_move` cannot play but the
    /// opponent can, the turn passes straight away.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        let mut game = Game {
            board,
            to_move,
            history: Vec::new(),
            outcome: None,
        };
        if check_finished(&game.board) {
            game.outcome = Some(find_winner(&game.board));
        } else if !has_available(&game.board, to_move) {
            game.to_move = to_move.opponent();
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        find_available(&self.board, self.to_move)
    }

    /// Plays `square` for the side to move and advances the turn.
    pub fn play(&mut self, square: Square) -> Result<Turn, OthelloError> {
        if self.is_over() {
            return Err(OthelloError::GameOver);
        }
        let side = self.to_move;
        let flips = captures_at(&self.board, square, side)
            .ok_or(OthelloError::IllegalMove { side, square })?;

        let mv = Move::new(square, flips);
        self.board.make_move(&mv, side);
        self.history.push(MoveRecord {
            side,
            square,
            flipped: mv.flips.len(),
        });

        let turn = if has_available(&self.board, side.opponent()) {
            self.to_move = side.opponent();
            Turn::Next(self.to_move)
        } else if check_finished(&self.board) {
            let outcome = find_winner(&self.board);
            self.outcome = Some(outcome);
            Turn::Over(outcome)
        } else {
            debug!(passing = %side.opponent(), "no legal move, turn passes");
            Turn::Pass(side)
        };
        Ok(turn)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
