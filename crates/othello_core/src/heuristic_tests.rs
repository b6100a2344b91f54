use super::*;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_initial_board_keeps_base_table() {
    let grid = HeuristicGrid::for_board(&Board::new());
    assert_eq!(grid.weights(Side::Black), &BASE_VALUES);
    assert_eq!(grid.weights(Side::White), &BASE_VALUES);
}

#[test]
fn test_update_is_idempotent() {
    let b = Board::from_diagram(
        "W.B..B.B
         ........
         B.......
         ...WB...
         ...BW..W
         ........
         ........
         B..W...W",
    )
    .unwrap();
    let mut grid = HeuristicGrid::new();
    grid.update(&b);
    let first = grid.clone();
    grid.update(&b);
    assert_eq!(grid, first);
}

#[test]
fn test_update_forgets_previous_board() {
    let mut b = Board::new();
    b.place(sq(0, 0), Cell::White);
    let mut grid = HeuristicGrid::new();
    grid.update(&b);
    assert_ne!(grid, HeuristicGrid::new());

    b.place(sq(0, 0), Cell::Empty);
    grid.update(&b);
    assert_eq!(grid, HeuristicGrid::for_board(&b));
    assert_eq!(grid, HeuristicGrid::new());
}

#[test]
fn test_owned_corner() {
    let mut b = Board::new();
    b.place(sq(7, 7), Cell::Black);
    let grid = HeuristicGrid::for_board(&b);

    for s in [sq(7, 6), sq(6, 7), sq(6, 6)] {
        assert_eq!(grid.value(Side::Black, s), 50);
    }
    assert_eq!(grid.value(Side::White, sq(7, 6)), -25);
    assert_eq!(grid.value(Side::White, sq(6, 7)), -25);
    assert_eq!(grid.value(Side::White, sq(6, 6)), -100);
    // the corner itself and the other corners are untouched
    assert_eq!(grid.value(Side::White, sq(7, 7)), 500);
    assert_eq!(grid.value(Side::White, sq(1, 1)), -10);
}

#[test]
fn test_owned_edge_anchor() {
    let mut b = Board::new();
    b.place(sq(4, 0), Cell::White);
    b.place(sq(0, 2), Cell::Black);
    let grid = HeuristicGrid::for_board(&b);

    assert_eq!(grid.value(Side::White, sq(4, 1)), 10);
    assert_eq!(grid.value(Side::Black, sq(4, 1)), -5);
    assert_eq!(grid.value(Side::Black, sq(1, 2)), 10);
    assert_eq!(grid.value(Side::White, sq(1, 2)), -5);
    // neighbours of the anchor along the edge keep their base value
    assert_eq!(grid.value(Side::White, sq(3, 1)), -5);
    assert_eq!(grid.value(Side::White, sq(5, 1)), -5);
}

#[test]
fn test_edge_cells_next_to_corner_are_not_anchors() {
    let mut b = Board::new();
    b.place(sq(0, 1), Cell::Black);
    b.place(sq(6, 7), Cell::White);
    let grid = HeuristicGrid::for_board(&b);
    assert_eq!(grid, HeuristicGrid::new());
}
