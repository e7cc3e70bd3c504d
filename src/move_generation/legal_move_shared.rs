use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::wall_geometry::step_blocked;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn is_enemy(game_state: &GameState, color: Color, square: Square) -> bool {
    game_state
        .piece_at(square)
        .is_some_and(|piece| piece.color != color)
}

#[inline]
pub fn is_friend(game_state: &GameState, color: Color, square: Square) -> bool {
    game_state
        .piece_at(square)
        .is_some_and(|piece| piece.color == color)
}

#[inline]
pub fn is_empty(game_state: &GameState, square: Square) -> bool {
    game_state.piece_at(square).is_none()
}

#[inline]
pub fn push_unique(out: &mut Vec<Square>, square: Square) {
    if !out.contains(&square) {
        out.push(square);
    }
}

/// Walk a ray from `from` until the board edge, a wall on the stepped edge,
/// a friendly piece (excluded) or an enemy piece (included).
pub fn slide_targets(
    game_state: &GameState,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = offset_square(current, d_row, d_col) {
            if step_blocked(&game_state.walls, current, next) || is_friend(game_state, color, next)
            {
                break;
            }
            push_unique(out, next);
            if is_enemy(game_state, color, next) {
                break;
            }
            current = next;
        }
    }
}
