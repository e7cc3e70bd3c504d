//! Square conversions for file-rank coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! row-major square index used by all three board layers.

use crate::errors::GameError;
use crate::game_state::chess_types::{col_of, row_of, square_at, Square, BOARD_SIZE};

/// Convert a coordinate such as `"e4"` to a square index.
///
/// The file letter is case-insensitive.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, GameError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(GameError::Parse(format!("invalid square: {square}")));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(GameError::Parse(format!(
            "invalid file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(GameError::Parse(format!(
            "invalid rank: {}",
            rank as char
        )));
    }

    let col = file - b'a';
    let row = BOARD_SIZE - (rank - b'0');
    Ok(square_at(row, col))
}

/// Convert a square index (`0..=63`) to a coordinate such as `"e4"`.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + col_of(square));
    let rank_char = char::from(b'0' + (BOARD_SIZE - row_of(square)));
    format!("{file_char}{rank_char}")
}
