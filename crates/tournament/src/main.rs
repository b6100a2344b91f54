//! Tournament CLI
//!
//! Run matches between Othello engines and track Elo ratings.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tournament::{
    canonical_engine_name, create_engine, gauntlet_opponents, EloTracker, MatchConfig, MatchRunner,
    TournamentConfig, TournamentResults,
};

#[derive(Parser, Debug)]
#[command(name = "tournament", version, about = "Othello engine match runner")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match between two engines and update the Elo table
    Match {
        /// First engine (minimax, positional or random)
        engine1: String,
        /// Second engine
        engine2: String,
        #[command(flatten)]
        opts: MatchOpts,
    },
    /// Play one engine against every other engine
    Gauntlet {
        /// Challenger engine
        challenger: String,
        #[command(flatten)]
        opts: MatchOpts,
        /// Where to write the JSON report
        #[arg(long, value_name = "FILE", default_value = "gauntlet_results.json")]
        report: PathBuf,
    },
    /// Print the current Elo table
    Leaderboard {
        #[arg(long, value_name = "FILE", default_value = "tournament_elo.json")]
        elo: PathBuf,
    },
}

#[derive(Args, Debug)]
struct MatchOpts {
    /// TOML file with tournament settings; flags override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Games per match
    #[arg(short, long)]
    games: Option<u32>,
    /// Search depth
    #[arg(short, long)]
    depth: Option<u8>,
    /// Seed for reproducible tie-breaks
    #[arg(short, long)]
    seed: Option<u64>,
    /// Elo table to update
    #[arg(long, value_name = "FILE", default_value = "tournament_elo.json")]
    elo: PathBuf,
}

impl MatchOpts {
    fn tournament_config(&self) -> Result<TournamentConfig> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::from_toml_file(path)?,
            None => TournamentConfig::default(),
        };
        if let Some(games) = self.games {
            config.games_per_match = games;
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn load_tracker(path: &Path) -> EloTracker {
    EloTracker::load_or_default(path).unwrap_or_else(|e| {
        warn!(error = %e, "starting a fresh Elo table");
        EloTracker::new()
    })
}

fn run_match(engine1: &str, engine2: &str, opts: &MatchOpts) -> Result<()> {
    let engine1_spec = canonical_engine_name(engine1)?;
    let engine2_spec = canonical_engine_name(engine2)?;
    let config = opts.tournament_config()?;
    let seed = config.seed;

    let mut engine1 = create_engine(engine1_spec, seed)?;
    let mut engine2 = create_engine(engine2_spec, seed.map(|s| s.wrapping_add(1)))?;

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", config.games_per_match, config.search_depth);
    println!();

    let runner = MatchRunner::new(MatchConfig::from(&config));
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!(
        "Score: {:.1}%, discs {}:{} (average margin {:+.1})",
        result.score() * 100.0,
        result.discs_for,
        result.discs_against,
        result.average_margin()
    );

    let mut tracker = load_tracker(&opts.elo);
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    println!();
    print!("{}", tracker.format_leaderboard());

    tracker
        .save(&opts.elo)
        .with_context(|| format!("saving Elo table to {}", opts.elo.display()))
}

fn run_gauntlet(challenger: &str, opts: &MatchOpts, report: &Path) -> Result<()> {
    let (challenger_spec, opponents) = gauntlet_opponents(challenger)?;
    let config = opts.tournament_config()?;
    let seed = config.seed;

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!(
        "Games per match: {}, Depth: {}",
        config.games_per_match, config.search_depth
    );

    let mut tracker = load_tracker(&opts.elo);
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        config.clone(),
    );
    let runner = MatchRunner::new(MatchConfig::from(&config));

    for (i, opponent) in opponents.into_iter().enumerate() {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let offset = 2 * i as u64;
        let mut challenger = create_engine(challenger_spec, seed.map(|s| s.wrapping_add(offset)))?;
        let mut opp_engine = create_engine(opponent, seed.map(|s| s.wrapping_add(offset + 1)))?;

        let result = runner.run_match(challenger.as_mut(), opp_engine.as_mut());

        println!(
            "Result: {}-{}-{} (Score: {:.1}%, average margin {:+.1})",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0,
            result.average_margin()
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    print!("{}", tracker.format_leaderboard());
    println!();
    print!("{}", results.generate_report());

    tracker
        .save(&opts.elo)
        .with_context(|| format!("saving Elo table to {}", opts.elo.display()))?;
    results
        .save(report)
        .with_context(|| format!("saving report to {}", report.display()))
}

fn show_leaderboard(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("No tournament data found. Run some matches first!");
        return Ok(());
    }
    let tracker = EloTracker::load(path)?;
    print!("{}", tracker.format_leaderboard());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Match {
            engine1,
            engine2,
            opts,
        } => run_match(&engine1, &engine2, &opts),
        Command::Gauntlet {
            challenger,
            opts,
            report,
        } => run_gauntlet(&challenger, &opts, &report),
        Command::Leaderboard { elo } => show_leaderboard(&elo),
    }
}
