//! Tournament configuration, results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::MatchResult;

/// Every pairing of a gauntlet, written out as a JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    pub config: TournamentConfig,
}

/// One pairing, tallied from engine1's side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament configuration. Missing keys in a TOML file fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u8,
    pub max_plies_per_game: u32,
    pub alternate_colors: bool,
    /// Base seed for the engines' tie-breaks; entropy when absent
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: othello_core::DEFAULT_MAX_DEPTH,
            max_plies_per_game: 128,
            alternate_colors: true,
            seed: None,
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, TournamentError> {
        let text = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Writes the results as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| TournamentError::json(path, e))?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| TournamentError::json(path, e))
    }

    /// Every match folded into one tally, from the engine1 side of each pairing
    pub fn overall(&self) -> MatchResult {
        self.matches.iter().fold(MatchResult::new(), |mut acc, entry| {
            acc.wins += entry.result.wins;
            acc.losses += entry.result.losses;
            acc.draws += entry.result.draws;
            acc.discs_for += entry.result.discs_for;
            acc.discs_against += entry.result.discs_against;
            acc
        })
    }

    /// One line per pairing with points, final disc totals and the average
    /// disc margin per game.
    pub fn generate_report(&self) -> String {
        let mut report = format!(
            "{}\n{} games per pairing at depth {}, up to {} plies per game\n\n",
            self.name,
            self.config.games_per_match,
            self.config.search_depth,
            self.config.max_plies_per_game
        );
        report.push_str(&report_line("Pairing", "W", "L", "D", "Score", "Discs", "Margin"));
        for entry in &self.matches {
            let pairing = format!("{} - {}", entry.engine1, entry.engine2);
            report.push_str(&tally_line(&pairing, &entry.result));
        }
        if self.matches.len() > 1 {
            report.push_str(&tally_line("Overall", &self.overall()));
        }
        report
    }
}

fn tally_line(label: &str, result: &MatchResult) -> String {
    report_line(
        label,
        &result.wins.to_string(),
        &result.losses.to_string(),
        &result.draws.to_string(),
        &format!("{:.1}%", result.score() * 100.0),
        &format!("{}:{}", result.discs_for, result.discs_against),
        &format!("{:+.1}", result.average_margin()),
    )
}

fn report_line(label: &str, w: &str, l: &str, d: &str, score: &str, discs: &str, margin: &str) -> String {
    format!("{label:<28}{w:>4}{l:>4}{d:>4}{score:>8}{discs:>11}{margin:>8}\n")
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
