//! King target generation.
//!
//! Plain one-square steps only. Castling is validated and applied by the
//! executor, see `legal_move_apply::apply_castle`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_friend, push_unique, KING_OFFSETS};
use crate::moves::wall_geometry::step_blocked;

pub fn generate_king_targets(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(king) = game_state.piece_at(from) else {
        return;
    };

    for (d_row, d_col) in KING_OFFSETS {
        if let Some(to) = offset_square(from, d_row, d_col) {
            if !is_friend(game_state, king.color, to) && !step_blocked(&game_state.walls, from, to)
            {
                push_unique(out, to);
            }
        }
    }
}
