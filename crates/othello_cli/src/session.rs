//! Human-versus-computer turn loop over any line-based input and output.

use anyhow::{bail, Result};
use othello_core::{coord_to_square, Engine, Game, GameOutcome, SearchLimits, Side, Turn};
use std::io::{BufRead, Write};
use tracing::debug;

/// The human always plays black and moves first.
pub const HUMAN: Side = Side::Black;

pub struct Session<'e> {
    game: Game,
    engine: &'e mut dyn Engine,
    limits: SearchLimits,
}

impl<'e> Session<'e> {
    pub fn new(game: Game, engine: &'e mut dyn Engine, limits: SearchLimits) -> Self {
        engine.new_game();
        Self {
            game,
            engine,
            limits,
        }
    }

    /// Plays until the game ends or the human quits. Returns the outcome of a
    /// finished game, `None` when input ran out or `quit` was entered.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Option<GameOutcome>> {
        loop {
            if let Some(outcome) = self.game.outcome() {
                writeln!(out, "{}", self.game.board())?;
                writeln!(out, "{}", outcome.message())?;
                return Ok(Some(outcome));
            }
            let keep_going = if self.game.to_move() == HUMAN {
                self.human_turn(input, out)?
            } else {
                self.computer_turn(out)?;
                true
            };
            if !keep_going {
                return Ok(None);
            }
        }
    }

    fn human_turn<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<bool> {
        writeln!(out, "{}", self.game.board())?;
        loop {
            write!(out, "Your move (e.g. d3, 'moves', 'quit'): ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match line.trim() {
                "" => continue,
                "quit" | "exit" => return Ok(false),
                "moves" => {
                    let squares: Vec<String> = self
                        .game
                        .legal_moves()
                        .iter()
                        .map(|m| m.square.to_string())
                        .collect();
                    writeln!(out, "Legal moves: {}", squares.join(" "))?;
                }
                text => {
                    let played = coord_to_square(text).and_then(|sq| self.game.play(sq));
                    match played {
                        Ok(turn) => {
                            if let Turn::Pass(_) = turn {
                                writeln!(out, "Computer has no legal move, you play again.")?;
                            }
                            return Ok(true);
                        }
                        Err(e) => writeln!(out, "{e}. Try again.")?,
                    }
                }
            }
        }
    }

    fn computer_turn<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let side = self.game.to_move();
        let mut board = self.game.board().clone();
        let result = self.engine.search(&mut board, side, self.limits);
        debug!(
            engine = self.engine.name(),
            nodes = result.nodes,
            score = result.score,
            candidates = result.candidates,
            "computer searched"
        );

        let Some(square) = result.best_move else {
            bail!("{} found no move for {side}", self.engine.name());
        };
        writeln!(out, "Computer plays {square}")?;
        if let Turn::Pass(_) = self.game.play(square)? {
            writeln!(out, "You have no legal move, computer plays again.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
