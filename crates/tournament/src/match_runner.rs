//! Match runner for playing games between engines

use othello_core::{Cell, Engine, Game, SearchLimits, Side, Turn, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::results::TournamentConfig;

/// Result of a single game from one engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side of the board.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// One finished game: the result plus the discs each side ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    pub discs_for: u32,
    pub discs_against: u32,
    pub plies: u32,
}

impl GameRecord {
    fn from_board(game: &Game, result: GameResult, plies: u32) -> Self {
        let board = game.board();
        Self {
            result,
            discs_for: board.count(Cell::Black) as u32,
            discs_against: board.count(Cell::White) as u32,
            plies,
        }
    }

    /// The same game from the other engine's point of view.
    pub fn flipped(self) -> Self {
        Self {
            result: self.result.flipped(),
            discs_for: self.discs_against,
            discs_against: self.discs_for,
            plies: self.plies,
        }
    }
}

/// Tally of a match from engine 1's point of view
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Final discs summed over all games
    #[serde(default)]
    pub discs_for: u32,
    #[serde(default)]
    pub discs_against: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        match game.result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.discs_for += game.discs_for;
        self.discs_against += game.discs_against;
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game: 1 for a win, 0.5 for a draw. An empty match counts
    /// as even.
    pub fn score(&self) -> f64 {
        match self.total_games() {
            0 => 0.5,
            n => (2 * self.wins + self.draws) as f64 / (2 * n) as f64,
        }
    }

    /// Average final disc difference per game, positive when engine 1 leads.
    pub fn average_margin(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            n => (self.discs_for as f64 - self.discs_against as f64) / n as f64,
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Plies after which an unfinished game is scored a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: othello_core::DEFAULT_MAX_DEPTH,
            max_plies: 128,
            alternate_colors: true,
        }
    }
}

impl From<&TournamentConfig> for MatchConfig {
    fn from(config: &TournamentConfig) -> Self {
        Self {
            num_games: config.games_per_match,
            depth: config.search_depth,
            max_plies: config.max_plies_per_game,
            alternate_colors: config.alternate_colors,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Black moves first, so engine1 opens the even games
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };
            result.record(&record);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1 = engine1.name(),
                engine2 = engine2.name(),
                color = if engine1_black { "B" } else { "W" },
                result = ?record.result,
                discs_for = record.discs_for,
                discs_against = record.discs_against,
                plies = record.plies,
                "game finished"
            );
        }

        result
    }

    /// Play a single game, returns the record from black's perspective
    pub fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameRecord {
        let mut game = Game::new();
        black.new_game();
        white.new_game();
        let limits = SearchLimits::depth(self.config.depth);

        for ply in 0..self.config.max_plies {
            let side = game.to_move();
            let mut board = game.board().clone();
            let engine: &mut dyn Engine = match side {
                Side::Black => &mut *black,
                Side::White => &mut *white,
            };

            let Some(square) = engine.search(&mut board, side, limits).best_move else {
                // Game keeps the side to move able to play, so this is a bug in the engine
                warn!(engine = engine.name(), %side, "no move returned, forfeiting");
                return GameRecord::from_board(&game, forfeit(side), ply);
            };

            match game.play(square) {
                Ok(Turn::Over(outcome)) => {
                    let result = match outcome.verdict {
                        Verdict::Win => GameResult::Win,
                        Verdict::Lose => GameResult::Loss,
                        Verdict::Tie => GameResult::Draw,
                    };
                    return GameRecord::from_board(&game, result, ply + 1);
                }
                Ok(Turn::Next(_) | Turn::Pass(_)) => {}
                Err(e) => {
                    warn!(engine = engine.name(), error = %e, "illegal move, forfeiting");
                    return GameRecord::from_board(&game, forfeit(side), ply);
                }
            }
        }

        // Ply limit reached
        GameRecord::from_board(&game, GameResult::Draw, self.config.max_plies)
    }
}

/// Result from black's perspective when `side` forfeits.
fn forfeit(side: Side) -> GameResult {
    match side {
        Side::Black => GameResult::Loss,
        Side::White => GameResult::Win,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
