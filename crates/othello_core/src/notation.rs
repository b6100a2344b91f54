//! Text coordinates for squares: a column letter `a`-`h` followed by a row
//! number `1`-`8`, so row 2 / column 3 is `d3`.

use crate::{error::OthelloError, types::Square};

pub fn square_to_coord(sq: Square) -> String {
    let c = (b'a' + sq.col() as u8) as char;
    let r = (b'1' + sq.row() as u8) as char;
    format!("{c}{r}")
}

pub fn coord_to_square(text: &str) -> Result<Square, OthelloError> {
    let trimmed = text.trim();
    let b = trimmed.as_bytes();
    if b.len() != 2 {
        return Err(OthelloError::InvalidSquare(trimmed.to_string()));
    }
    let c = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'h').contains(&c) || !(b'1'..=b'8').contains(&r) {
        return Err(OthelloError::InvalidSquare(trimmed.to_string()));
    }
    Square::new((r - b'1') as i8, (c - b'a') as i8)
        .ok_or_else(|| OthelloError::InvalidSquare(trimmed.to_string()))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
