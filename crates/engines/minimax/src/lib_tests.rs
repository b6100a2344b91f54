use super::*;
use othello_core::{find_available, Game, Square};
use rand::seq::SliceRandom;

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::with_seed(3);
    let mut board = Board::new();

    let result = engine.search(&mut board, Side::Black, SearchLimits::depth(2));

    let square = result.best_move.expect("black has opening moves");
    assert!(find_available(&board, Side::Black)
        .iter()
        .any(|m| m.square == square));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
    assert_eq!(board, Board::new());
}

#[test]
fn minimax_engine_handles_no_moves() {
    let mut engine = MinimaxEngine::with_seed(3);
    let mut board = Board::from_diagram(&"WWWWWWWW\n".repeat(8)).unwrap();

    let result = engine.search(&mut board, Side::Black, SearchLimits::default());

    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);
    assert_eq!(result.candidates, 0);
}

#[test]
fn seeded_engines_agree() {
    let mut a = MinimaxEngine::with_seed(11);
    let mut b = MinimaxEngine::with_seed(11);
    let mut board = Board::new();
    for _ in 0..8 {
        let ra = a.search(&mut board, Side::Black, SearchLimits::depth(1));
        let rb = b.search(&mut board, Side::Black, SearchLimits::depth(1));
        assert_eq!(ra, rb);
    }
}

#[test]
fn positional_engine_plays_and_restores_board() {
    let mut engine = MinimaxEngine::with_seed(5).with_eval(EvalMode::Positional);
    assert_eq!(engine.eval_mode(), EvalMode::Positional);
    assert_eq!(engine.name(), "Minimax Positional v1.0");

    let mut board = Board::new();
    let result = engine.search(&mut board, Side::White, SearchLimits::depth(2));
    assert!(result.best_move.is_some());
    assert_eq!(board, Board::new());
}

#[test]
fn positional_engine_plays_forced_corner() {
    // a1 is white's only move and ends the game.
    let mut board = Board::from_diagram(
        ".BBW....
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    let mut engine = MinimaxEngine::with_seed(0).with_eval(EvalMode::Positional);
    let result = engine.search(&mut board, Side::White, SearchLimits::depth(0));
    assert_eq!(result.best_move, Square::new(0, 0));
}

#[test]
fn new_game_resets_grid() {
    let mut engine = MinimaxEngine::with_seed(1);
    let mut board = Board::new();
    engine.search(&mut board, Side::Black, SearchLimits::depth(1));
    engine.new_game();
    assert_eq!(engine.grid(), &HeuristicGrid::new());
    assert_eq!(engine.name(), "Minimax v1.0");
}

#[test]
fn grid_matches_board_after_search() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut game = Game::new();
    for _ in 0..40 {
        let moves = game.legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        game.play(mv.square).unwrap();
    }
    let side = game.to_move();
    let mut board = game.board().clone();

    let mut engine = MinimaxEngine::with_seed(2).with_eval(EvalMode::Positional);
    engine.search(&mut board, side, SearchLimits::depth(2));

    assert_eq!(&board, game.board());
    assert_eq!(engine.grid(), &HeuristicGrid::for_board(&board));
}
