//! Elo ratings, persisted between runs as JSON

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::MatchResult;

/// Rating of an engine that has not played yet
pub const DEFAULT_ELO: f64 = 1500.0;

/// Rating change per game for a full point above expectation
pub const K_FACTOR: f64 = 32.0;

/// Probability-like score `rating` is expected to take off `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    let gap = (opponent - rating) / 400.0;
    1.0 / (1.0 + 10.0_f64.powf(gap))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub elo: f64,
    pub games: u32,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            elo: DEFAULT_ELO,
            games: 0,
        }
    }
}

/// One rated match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    /// Points engine1 gained (engine2 lost the same amount)
    pub elo_change: f64,
}

/// Engine ratings plus the matches that produced them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub ratings: BTreeMap<String, Rating>,
    pub history: Vec<MatchRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| TournamentError::json(path, e))
    }

    /// Like [`EloTracker::load`], but a missing file is an empty table
    pub fn load_or_default(path: &Path) -> Result<Self, TournamentError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| TournamentError::json(path, e))?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Current Elo, [`DEFAULT_ELO`] for unknown engines
    pub fn rating(&self, engine: &str) -> f64 {
        self.ratings.get(engine).map_or(DEFAULT_ELO, |r| r.elo)
    }

    /// Applies a match to both engines and returns engine1's change.
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) -> f64 {
        let expected = expected_score(self.rating(engine1), self.rating(engine2));
        let games = result.total_games();
        let elo_change = K_FACTOR * games as f64 * (result.score() - expected);

        for (engine, delta) in [(engine1, elo_change), (engine2, -elo_change)] {
            let entry = self.ratings.entry(engine.to_string()).or_default();
            entry.elo += delta;
            entry.games += games;
        }

        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: result.clone(),
            timestamp: unix_now(),
            elo_change,
        });
        elo_change
    }

    /// Engines by descending Elo, ties by name
    pub fn leaderboard(&self) -> Vec<(&str, Rating)> {
        let mut entries: Vec<_> = self.ratings.iter().map(|(name, r)| (name.as_str(), *r)).collect();
        entries.sort_by(|a, b| b.1.elo.total_cmp(&a.1.elo).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn format_leaderboard(&self) -> String {
        let mut out = String::from("Rank  Engine                 Elo  Games\n");
        for (rank, (name, rating)) in self.leaderboard().into_iter().enumerate() {
            out.push_str(&format!(
                "{:>4}  {:<16} {:>9.1} {:>6}\n",
                rank + 1,
                name,
                rating.elo,
                rating.games
            ));
        }
        out
    }
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
