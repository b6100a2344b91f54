use std::ops::{Deref, DerefMut};

use crate::{error::OthelloError, types::*};

/// The 8x8 occupancy grid.
///
/// All writes go through [`Board::place`]; move application and undo are
/// built on top of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting layout: white on d4/e5, black on e4/d5.
    pub fn new() -> Self {
        let mut b = Self::empty();
        b.cells[3][3] = Cell::White;
        b.cells[3][4] = Cell::Black;
        b.cells[4][3] = Cell::Black;
        b.cells[4][4] = Cell::White;
        b
    }

    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Parses eight rows of `.`, `B` and `W` (case-insensitive, whitespace
    /// ignored). Row 0 comes first.
    pub fn from_diagram(diagram: &str) -> Result<Self, OthelloError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(OthelloError::InvalidDiagram(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(OthelloError::InvalidDiagram(format!(
                    "row {} has {} cells",
                    r + 1,
                    row.len()
                )));
            }
            for (c, ch) in row.iter().enumerate() {
                let cell = match ch.to_ascii_uppercase() {
                    '.' => Cell::Empty,
                    'B' => Cell::Black,
                    'W' => Cell::White,
                    other => {
                        return Err(OthelloError::InvalidDiagram(format!(
                            "unexpected '{other}' in row {}",
                            r + 1
                        )));
                    }
                };
                board.cells[r][c] = cell;
            }
        }
        Ok(board)
    }

    /// Bounds predicate over signed coordinates.
    pub fn is_on_board(row: i8, col: i8) -> bool {
        Square::new(row, col).is_some()
    }

    /// Unconditional write. Legality is the caller's concern.
    pub fn place(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row()][sq.col()] = cell;
    }

    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.row()][sq.col()]
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Writes the placement and every capture of `mv` in `side`'s colour.
    pub fn make_move(&mut self, mv: &Move, side: Side) {
        self.place(mv.square, side.into());
        for &sq in &mv.flips {
            self.place(sq, side.into());
        }
    }

    /// Reverts `make_move`: captures go back to the opponent and the placement
    /// square is emptied.
    pub fn unmake_move(&mut self, mv: &Move, side: Side) {
        for &sq in &mv.flips {
            self.place(sq, side.opponent().into());
        }
        self.place(mv.square, Cell::Empty);
    }

    /// Applies `mv` for the lifetime of the returned guard. Dropping the guard
    /// undoes the move, whichever way the caller leaves its scope.
    pub fn scoped<'a>(&'a mut self, mv: &'a Move, side: Side) -> ScopedMove<'a> {
        self.make_move(mv, side);
        ScopedMove {
            board: self,
            mv,
            side,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r + 1)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A move applied to a borrowed board, undone on drop.
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    mv: &'a Move,
    side: Side,
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.unmake_move(self.mv, self.side);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
