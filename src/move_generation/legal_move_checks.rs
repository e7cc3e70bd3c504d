use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::generate_targets;

/// A piece of `attacker_color` has `square` among its generator targets.
///
/// Pawns only count as attacking occupied squares, so probes of an empty
/// square must first put the defending piece there.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    game_state.squares_of(attacker_color).any(|from| {
        targets.clear();
        generate_targets(game_state, from, &mut targets);
        targets.contains(&square)
    })
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Recompute both `in_check` flags from the current board.
pub fn refresh_check_flags(game_state: &mut GameState) {
    for color in [Color::Light, Color::Dark] {
        game_state.in_check[color.index()] = is_king_in_check(game_state, color);
    }
}
