use super::*;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_initial_layout() {
    let b = Board::new();
    assert_eq!(b.cell(sq(3, 3)), Cell::White);
    assert_eq!(b.cell(sq(3, 4)), Cell::Black);
    assert_eq!(b.cell(sq(4, 3)), Cell::Black);
    assert_eq!(b.cell(sq(4, 4)), Cell::White);
    assert_eq!(b.count(Cell::Empty), 60);
    assert_eq!(b.count(Cell::Black), 2);
    assert_eq!(b.count(Cell::White), 2);
}

#[test]
fn test_is_on_board() {
    assert!(Board::is_on_board(0, 0));
    assert!(Board::is_on_board(7, 7));
    assert!(!Board::is_on_board(-1, 0));
    assert!(!Board::is_on_board(0, 8));
    assert!(!Board::is_on_board(8, -1));
}

#[test]
fn test_place_overwrites_unconditionally() {
    let mut b = Board::new();
    b.place(sq(3, 3), Cell::Black);
    assert_eq!(b.cell(sq(3, 3)), Cell::Black);
    b.place(sq(3, 3), Cell::Empty);
    assert_eq!(b.cell(sq(3, 3)), Cell::Empty);
}

#[test]
fn test_diagram_round_trip_of_initial_layout() {
    let b = Board::from_diagram(
        "........
         ........
         ........
         ...WB...
         ...BW...
         ........
         ........
         ........",
    )
    .unwrap();
    assert_eq!(b, Board::new());
}

#[test]
fn test_diagram_errors() {
    assert!(matches!(
        Board::from_diagram("........"),
        Err(OthelloError::InvalidDiagram(_))
    ));
    let bad_char = "........\n".repeat(7) + "...X....";
    assert!(matches!(
        Board::from_diagram(&bad_char),
        Err(OthelloError::InvalidDiagram(_))
    ));
    let short_row = "........\n".repeat(7) + ".......";
    assert!(matches!(
        Board::from_diagram(&short_row),
        Err(OthelloError::InvalidDiagram(_))
    ));
}

#[test]
fn test_make_and_unmake_move() {
    let mut b = Board::new();
    let before = b.clone();
    let mv = Move::new(sq(2, 3), vec![sq(3, 3)]);

    b.make_move(&mv, Side::Black);
    assert_eq!(b.cell(sq(2, 3)), Cell::Black);
    assert_eq!(b.cell(sq(3, 3)), Cell::Black);

    b.unmake_move(&mv, Side::Black);
    assert_eq!(b, before);
}

#[test]
fn test_scoped_move_restores_on_drop() {
    let mut b = Board::new();
    let before = b.clone();
    let mv = Move::new(sq(4, 5), vec![sq(4, 4)]);
    {
        let scoped = b.scoped(&mv, Side::Black);
        assert_eq!(scoped.count(Cell::Black), 4);
        assert_eq!(scoped.count(Cell::White), 1);
    }
    assert_eq!(b, before);
}

#[test]
fn test_scoped_move_restores_on_early_exit() {
    fn leave_early(board: &mut Board, mv: &Move) -> usize {
        let scoped = board.scoped(mv, Side::Black);
        for n in 0..10 {
            if n == 1 {
                return scoped.count(Cell::Black);
            }
        }
        0
    }

    let mut b = Board::new();
    let mv = Move::new(sq(5, 4), vec![sq(4, 4)]);
    assert_eq!(leave_early(&mut b, &mv), 4);
    assert_eq!(b, Board::new());
}

#[test]
fn test_display_shows_coordinates() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "  a b c d e f g h");
    assert_eq!(lines[4], "4 . . . W B . . .");
    assert_eq!(lines[5], "5 . . . B W . . .");
}
