use super::*;
use minimax_engine::MinimaxEngine;
use othello_core::{Board, SearchResult};
use random_engine::RandomEngine;

/// Engine that never finds a move.
struct Resigner;

impl Engine for Resigner {
    fn search(&mut self, _board: &mut Board, _side: Side, limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_move: None,
            score: 0,
            depth: limits.max_depth,
            nodes: 0,
            candidates: 0,
        }
    }

    fn name(&self) -> &str {
        "Resigner"
    }
}

#[test]
fn test_self_play() {
    let mut engine1 = MinimaxEngine::with_seed(1);
    let mut engine2 = MinimaxEngine::with_seed(2);

    let config = MatchConfig {
        num_games: 2,
        depth: 1,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_random_games_finish() {
    let mut engine1 = RandomEngine::with_seed(3);
    let mut engine2 = RandomEngine::with_seed(4);
    let result = quick_match(&mut engine1, &mut engine2, 6, 0);
    assert_eq!(result.total_games(), 6);
}

#[test]
fn test_ply_limit_is_a_draw() {
    let runner = MatchRunner::new(MatchConfig {
        num_games: 1,
        depth: 0,
        max_plies: 4,
        alternate_colors: true,
    });
    let mut black = RandomEngine::with_seed(5);
    let mut white = RandomEngine::with_seed(6);
    let record = runner.play_game(&mut black, &mut white);
    assert_eq!(record.result, GameResult::Draw);
    assert_eq!(record.plies, 4);
    // four moves each add one disc to the board
    assert_eq!(record.discs_for + record.discs_against, 8);
}

#[test]
fn test_engine_without_move_forfeits() {
    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        depth: 0,
        ..Default::default()
    });
    let mut resigner = Resigner;
    let mut random = RandomEngine::with_seed(7);

    let record = runner.play_game(&mut resigner, &mut random);
    assert_eq!(record.result, GameResult::Loss);
    assert_eq!((record.discs_for, record.discs_against, record.plies), (2, 2, 0));

    // Resigner loses with either color. As white it faces one black move
    // that leaves 4 black discs against 1.
    let result = runner.run_match(&mut resigner, &mut random);
    assert_eq!(
        result,
        MatchResult {
            wins: 0,
            losses: 2,
            draws: 0,
            discs_for: 3,
            discs_against: 6,
        }
    );
}

#[test]
fn test_config_from_tournament_config() {
    let config = MatchConfig::from(&TournamentConfig {
        games_per_match: 4,
        search_depth: 3,
        max_plies_per_game: 90,
        alternate_colors: false,
        seed: Some(1),
    });
    assert_eq!(config.num_games, 4);
    assert_eq!(config.depth, 3);
    assert_eq!(config.max_plies, 90);
    assert!(!config.alternate_colors);
}

#[test]
fn test_finished_games_record_final_discs() {
    let mut engine1 = RandomEngine::with_seed(8);
    let mut engine2 = RandomEngine::with_seed(9);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 1,
        depth: 0,
        ..Default::default()
    });
    let record = runner.play_game(&mut engine1, &mut engine2);

    assert!(record.discs_for + record.discs_against <= 64);
    let expected = match record.discs_for.cmp(&record.discs_against) {
        std::cmp::Ordering::Greater => GameResult::Win,
        std::cmp::Ordering::Less => GameResult::Loss,
        std::cmp::Ordering::Equal => GameResult::Draw,
    };
    assert_eq!(record.result, expected);
}

#[test]
fn test_record_and_flip() {
    let win = GameRecord {
        result: GameResult::Win,
        discs_for: 40,
        discs_against: 24,
        plies: 60,
    };
    let mut result = MatchResult::new();
    result.record(&win);
    result.record(&win.flipped().flipped());
    result.record(&GameRecord {
        result: GameResult::Draw,
        discs_for: 32,
        discs_against: 32,
        plies: 60,
    });

    assert_eq!((result.wins, result.losses, result.draws), (2, 0, 1));
    assert_eq!(win.flipped().result, GameResult::Loss);
    assert_eq!(win.flipped().discs_for, 24);
    assert_eq!(result.average_margin(), 32.0 / 3.0);
    assert_eq!(result.score(), 2.5 / 3.0);
}

#[test]
fn test_empty_match_is_even() {
    let result = MatchResult::new();
    assert_eq!(result.score(), 0.5);
    assert_eq!(result.average_margin(), 0.0);
}
