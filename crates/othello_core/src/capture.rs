//! The directional capture rule.

use crate::{board::Board, types::*};

/// Returns the discs `side` would capture by playing at (`row`, `col`), or
/// `None` if the placement is illegal.
///
/// A placement is illegal when the square is off the board, already
/// occupied, or brackets no opponent run in any direction. Captures are listed
/// direction by direction in [`DIRECTIONS`] order; the placement square itself
/// is never part of the list.
pub fn is_valid_move(board: &Board, row: i8, col: i8, side: Side) -> Option<Vec<Square>> {
    let origin = Square::new(row, col)?;
    captures_at(board, origin, side)
}

/// Same as [`is_valid_move`] for a square already known to be on the board.
pub fn captures_at(board: &Board, origin: Square, side: Side) -> Option<Vec<Square>> {
    if !board.cell(origin).is_empty() {
        return None;
    }

    let own = Cell::from(side);
    let theirs = Cell::from(side.opponent());
    let mut flips = Vec::new();

    for dir in DIRECTIONS {
        let run_start = flips.len();
        let mut cur = origin.step(dir);
        // Walk over the opponent run; it only counts if one of our discs closes it.
        while let Some(sq) = cur {
            if board.cell(sq) != theirs {
                break;
            }
            flips.push(sq);
            cur = sq.step(dir);
        }
        let closed = matches!(cur, Some(sq) if board.cell(sq) == own);
        if closed {
            // Captures are recorded walking back from the closing disc.
            flips[run_start..].reverse();
        } else {
            flips.truncate(run_start);
        }
    }

    if flips.is_empty() { None } else { Some(flips) }
}

/// True if `side` has a capture at `origin`, without collecting the discs.
pub fn is_capturing(board: &Board, origin: Square, side: Side) -> bool {
    if !board.cell(origin).is_empty() {
        return false;
    }
    let own = Cell::from(side);
    let theirs = Cell::from(side.opponent());

    DIRECTIONS.iter().any(|&dir| {
        let mut cur = origin.step(dir);
        let mut run = 0;
        while let Some(sq) = cur {
            match board.cell(sq) {
                c if c == theirs => run += 1,
                c if c == own => return run > 0,
                _ => return false,
            }
            cur = sq.step(dir);
        }
        false
    })
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod capture_tests;
