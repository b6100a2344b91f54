use thiserror::Error;

use crate::types::{Side, Square};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OthelloError {
    #[error("invalid square notation '{0}' (expected a column a-h and a row 1-8, e.g. d3)")]
    InvalidSquare(String),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("{side} cannot play {square}")]
    IllegalMove { side: Side, square: Square },

    #[error("the game is already finished")]
    GameOver,
}
