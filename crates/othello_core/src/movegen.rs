use crate::{board::Board, capture::captures_at, capture::is_capturing, types::*};

/// All legal moves for `side`, in row-major order. Empty means no legal move.
pub fn find_available(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    find_available_into(board, side, &mut out);
    out
}

/// Fills `out` with the legal moves for `side`, reusing its allocation.
pub fn find_available_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    out.extend(
        Square::all().filter_map(|sq| captures_at(board, sq, side).map(|flips| Move::new(sq, flips))),
    );
}

/// True if `side` has at least one legal move. Stops at the first one found.
pub fn has_available(board: &Board, side: Side) -> bool {
    Square::all().any(|sq| is_capturing(board, sq, side))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
