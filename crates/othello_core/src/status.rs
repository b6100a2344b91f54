//! End-of-game detection and scoring.

use crate::{board::Board, movegen::has_available, types::*};

/// True when no empty cell remains.
pub fn is_full(board: &Board) -> bool {
    board.count(Cell::Empty) == 0
}

/// True when the board is full or neither side can move.
pub fn check_finished(board: &Board) -> bool {
    is_full(board) || Side::ALL.iter().all(|&side| !has_available(board, side))
}

/// The result from Black's (the human player's) point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Win,
    Lose,
    Tie,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Win => write!(f, "win"),
            Verdict::Lose => write!(f, "lose"),
            Verdict::Tie => write!(f, "tie"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub black: usize,
    pub white: usize,
    pub verdict: Verdict,
}

impl GameOutcome {
    /// The side with more discs, `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        match self.verdict {
            Verdict::Win => Some(Side::Black),
            Verdict::Lose => Some(Side::White),
            Verdict::Tie => None,
        }
    }

    /// Final announcement for a human playing black against the computer.
    pub fn message(&self) -> String {
        let headline = match self.verdict {
            Verdict::Win => "Congratulations, you win!",
            Verdict::Lose => "Unlucky, computer wins.",
            Verdict::Tie => "The game is a tie.",
        };
        format!(
            "{headline}\nPlayer: {} tiles\nComputer: {} tiles",
            self.black, self.white
        )
    }
}

/// Counts both colours and compares them. Pure reporting, no state change.
pub fn find_winner(board: &Board) -> GameOutcome {
    let black = board.count(Cell::Black);
    let white = board.count(Cell::White);
    let verdict = match black.cmp(&white) {
        std::cmp::Ordering::Greater => Verdict::Win,
        std::cmp::Ordering::Less => Verdict::Lose,
        std::cmp::Ordering::Equal => Verdict::Tie,
    };
    GameOutcome {
        black,
        white,
        verdict,
    }
}
