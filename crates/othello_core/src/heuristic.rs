//! Positional weight grids, one per side.
//!
//! Both grids start from [`BASE_VALUES`] and are then adjusted around the
//! anchor cells: the four corners and the four interior cells of every edge.
//! An occupied corner makes its three neighbours valuable for the owner and
//! costly for the opponent (the diagonal one most of all). An occupied edge
//! anchor does the same, more mildly, for the one cell just inside it.
//!
//! The grids are a pure function of the board: [`HeuristicGrid::update`]
//! always rebuilds from the base table, so the result does not depend on
//! what the grid held before.

use crate::{board::Board, types::*};

pub const BASE_VALUES: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [500, 25, 50, 50, 50, 50, 25, 500],
    [25, -10, -5, -5, -5, -5, -10, 25],
    [50, -5, 1, 1, 1, 1, -5, 50],
    [50, -5, 1, 1, 1, 1, -5, 50],
    [50, -5, 1, 1, 1, 1, -5, 50],
    [50, -5, 1, 1, 1, 1, -5, 50],
    [25, -10, -5, -5, -5, -5, -10, 25],
    [500, 25, 50, 50, 50, 50, 25, 500],
];

const CORNER_OWNER: i32 = 50;
const CORNER_EDGE_PENALTY: i32 = -25;
const CORNER_DIAGONAL_PENALTY: i32 = -100;
const EDGE_OWNER: i32 = 10;
const EDGE_PENALTY: i32 = -5;

/// (corner, [edge neighbour, edge neighbour], diagonal neighbour)
const CORNERS: [((usize, usize), [(usize, usize); 2], (usize, usize)); 4] = [
    ((0, 0), [(0, 1), (1, 0)], (1, 1)),
    ((0, 7), [(0, 6), (1, 7)], (1, 6)),
    ((7, 0), [(6, 0), (7, 1)], (6, 1)),
    ((7, 7), [(7, 6), (6, 7)], (6, 6)),
];

pub type Grid = [[i32; BOARD_SIZE]; BOARD_SIZE];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeuristicGrid {
    grids: [Grid; 2],
}

impl Default for HeuristicGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicGrid {
    pub fn new() -> Self {
        Self {
            grids: [BASE_VALUES; 2],
        }
    }

    /// Builds the grids for `board` in one step.
    pub fn for_board(board: &Board) -> Self {
        let mut grid = Self::new();
        grid.update(board);
        grid
    }

    pub fn weights(&self, side: Side) -> &Grid {
        &self.grids[side.idx()]
    }

    pub fn value(&self, side: Side, sq: Square) -> i32 {
        self.grids[side.idx()][sq.row()][sq.col()]
    }

    /// Recomputes both grids from the current corner and edge occupancy.
    pub fn update(&mut self, board: &Board) {
        self.grids = [BASE_VALUES; 2];
        self.update_corners(board);
        self.update_edges(board);
    }

    fn owner(board: &Board, (row, col): (usize, usize)) -> Option<Side> {
        Square::new(row as i8, col as i8).and_then(|sq| board.cell(sq).side())
    }

    fn set(&mut self, side: Side, (row, col): (usize, usize), value: i32) {
        self.grids[side.idx()][row][col] = value;
    }

    fn update_corners(&mut self, board: &Board) {
        for (corner, edges, diagonal) in CORNERS {
            let Some(owner) = Self::owner(board, corner) else {
                continue;
            };
            let other = owner.opponent();
            for cell in edges {
                self.set(owner, cell, CORNER_OWNER);
                self.set(other, cell, CORNER_EDGE_PENALTY);
            }
            self.set(owner, diagonal, CORNER_OWNER);
            self.set(other, diagonal, CORNER_DIAGONAL_PENALTY);
        }
    }

    fn update_edges(&mut self, board: &Board) {
        for n in 2..6 {
            // (anchor on the edge, the cell just inside it)
            let anchors = [
                ((0, n), (1, n)),
                ((7, n), (6, n)),
                ((n, 0), (n, 1)),
                ((n, 7), (n, 6)),
            ];
            for (anchor, inner) in anchors {
                if let Some(owner) = Self::owner(board, anchor) {
                    self.set(owner, inner, EDGE_OWNER);
                    self.set(owner.opponent(), inner, EDGE_PENALTY);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod heuristic_tests;
