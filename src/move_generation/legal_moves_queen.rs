use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{
    slide_targets, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};

pub fn generate_queen_targets(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(queen) = game_state.piece_at(from) else {
        return;
    };
    slide_targets(game_state, queen.color, from, &ROOK_DIRECTIONS, out);
    slide_targets(game_state, queen.color, from, &BISHOP_DIRECTIONS, out);
}
