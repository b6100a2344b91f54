use crate::{board::Board, heuristic::HeuristicGrid, types::*};

/// White discs minus black discs. White maximizes, Black minimizes.
pub fn board_score(board: &Board) -> i32 {
    board.count(Cell::White) as i32 - board.count(Cell::Black) as i32
}

/// Sum of each side's positional weights over the squares it occupies, white
/// minus black. Same sign convention as [`board_score`].
pub fn positional_score(board: &Board, grid: &HeuristicGrid) -> i32 {
    Square::all()
        .map(|sq| match board.cell(sq).side() {
            Some(Side::White) => grid.value(Side::White, sq),
            Some(Side::Black) => -grid.value(Side::Black, sq),
            None => 0,
        })
        .sum()
}
