//! Tests for end-of-game detection and scoring
//!
//! - Full board
//! - Both sides blocked with empty cells left
//! - Winner and verdict reporting

use othello_core::{
    check_finished, find_available, find_winner, is_full, Board, Cell, Side, Square, Verdict,
};

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_full_board_is_finished() {
    let board = Board::from_diagram(
        "WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB",
    )
    .unwrap();
    assert!(is_full(&board));
    assert!(check_finished(&board));
}

#[test]
fn test_both_sides_blocked_with_empty_cells_is_finished() {
    // Empty cells remain but nothing is bracketable.
    let board = Board::from_diagram(
        "WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWWWWWW.
         WWWWWW..
         WWWWWW.B",
    )
    .unwrap();
    assert!(!is_full(&board));
    assert!(find_available(&board, Side::Black).is_empty());
    assert!(find_available(&board, Side::White).is_empty());
    assert!(check_finished(&board));
}

#[test]
fn test_one_side_blocked_is_not_finished() {
    let board = Board::from_diagram(
        "BW......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    assert!(find_available(&board, Side::White).is_empty());
    assert!(!find_available(&board, Side::Black).is_empty());
    assert!(!check_finished(&board));
}

#[test]
fn test_opening_is_not_finished() {
    let board = Board::new();
    assert!(!is_full(&board));
    assert!(!check_finished(&board));
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_white_ahead_34_to_30() {
    let mut board = Board::empty();
    for (i, sq) in Square::all().enumerate() {
        let cell = if i < 34 { Cell::White } else { Cell::Black };
        board.place(sq, cell);
    }
    let outcome = find_winner(&board);
    assert_eq!(outcome.white, 34);
    assert_eq!(outcome.black, 30);
    assert_eq!(outcome.verdict, Verdict::Lose);
    assert_eq!(outcome.leader(), Some(Side::White));
    assert_eq!(outcome.verdict.to_string(), "lose");
    assert!(outcome.message().starts_with("Unlucky, computer wins."));
}

#[test]
fn test_black_ahead_is_a_win() {
    let mut board = Board::new();
    board.place(Square::new(0, 0).unwrap(), Cell::Black);
    let outcome = find_winner(&board);
    assert_eq!((outcome.black, outcome.white), (3, 2));
    assert_eq!(outcome.verdict, Verdict::Win);
    assert_eq!(outcome.leader(), Some(Side::Black));
    assert_eq!(
        outcome.message(),
        "Congratulations, you win!\nPlayer: 3 tiles\nComputer: 2 tiles"
    );
}

#[test]
fn test_equal_counts_is_a_tie() {
    let outcome = find_winner(&Board::new());
    assert_eq!(outcome.verdict, Verdict::Tie);
    assert_eq!(outcome.leader(), None);
    assert_eq!(outcome.verdict.to_string(), "tie");
}

#[test]
fn test_find_winner_does_not_touch_the_board() {
    let board = Board::new();
    let before = board.clone();
    let _ = find_winner(&board);
    assert_eq!(board, before);
}
