//! Wall adjacency queries.
//!
//! A cell owns its west and south edges, so the wall between `(r, c)` and
//! `(r, c + 1)` lives on `(r, c + 1)` and the wall between `(r, c)` and
//! `(r + 1, c)` lives on `(r, c)`. Diagonal steps are only ever blocked on
//! the NE-SW diagonal, by a double wall on the upper (north-east) square.

use crate::game_state::chess_types::*;

/// Wall across the shared edge of two orthogonal neighbours.
///
/// Returns `false` for squares that are not orthogonally adjacent.
pub fn wall_between(walls: &[Wall; 64], a: Square, b: Square) -> bool {
    let (a_row, a_col) = (row_of(a), col_of(a));
    let (b_row, b_col) = (row_of(b), col_of(b));

    if a_row == b_row {
        if b_col == a_col + 1 {
            walls[b as usize].has_west()
        } else if a_col == b_col + 1 {
            walls[a as usize].has_west()
        } else {
            false
        }
    } else if a_col == b_col {
        if b_row == a_row + 1 {
            walls[a as usize].has_south()
        } else if a_row == b_row + 1 {
            walls[b as usize].has_south()
        } else {
            false
        }
    } else {
        false
    }
}

/// Wall across the corner of two diagonal neighbours.
///
/// Returns `false` for squares that are not diagonally adjacent.
pub fn wall_diag(walls: &[Wall; 64], a: Square, b: Square) -> bool {
    let (a_row, a_col) = (row_of(a), col_of(a));
    let (b_row, b_col) = (row_of(b), col_of(b));

    if a_row.abs_diff(b_row) != 1 || a_col.abs_diff(b_col) != 1 {
        return false;
    }

    if a_row < b_row && a_col > b_col {
        walls[a as usize] == Wall::WestSouth
    } else if a_row > b_row && a_col < b_col {
        walls[b as usize] == Wall::WestSouth
    } else {
        false
    }
}

/// Single-step crossing test for king steps, slider steps and mine blasts.
#[inline]
pub fn step_blocked(walls: &[Wall; 64], from: Square, to: Square) -> bool {
    if row_of(from) == row_of(to) || col_of(from) == col_of(to) {
        wall_between(walls, from, to)
    } else {
        wall_diag(walls, from, to)
    }
}
