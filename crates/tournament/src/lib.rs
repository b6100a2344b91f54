//! Tournament Runner for Othello engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines with alternating colors
//! - Tracking Elo ratings across runs
//! - Writing JSON reports of gauntlets
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and random engines
//! cargo run -p tournament -- match minimax random --games 20
//!
//! # Run a gauntlet (one engine vs all others)
//! cargo run -p tournament -- gauntlet positional --config tournament.toml
//! ```

mod elo;
mod engines;
mod error;
mod match_runner;
mod results;

pub use elo::*;
pub use engines::*;
pub use error::TournamentError;
pub use match_runner::*;
pub use results::*;
