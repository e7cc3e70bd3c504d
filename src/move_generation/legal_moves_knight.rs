use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_friend, push_unique, KNIGHT_OFFSETS};

/// Knights jump, so walls never block them.
pub fn generate_knight_targets(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(knight) = game_state.piece_at(from) else {
        return;
    };

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(to) = offset_square(from, d_row, d_col) {
            if !is_friend(game_state, knight.color, to) {
                push_unique(out, to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_targets;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn knight_ignores_walls_around_it() {
        let d4 = algebraic_to_square("d4").expect("d4 should parse");
        let mut state = GameState::new_empty();
        state.set_piece(d4, Some(Piece::new(Color::Light, PieceKind::Knight)));
        state.walls = [Wall::WestSouth; 64];

        let mut out = Vec::new();
        generate_knight_targets(&state, d4, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_on_start_square_skips_friendly_pawn() {
        let g1 = algebraic_to_square("g1").expect("g1 should parse");
        let state = GameState::new_game();
        let mut out = Vec::new();
        generate_knight_targets(&state, g1, &mut out);
        out.sort_unstable();

        let mut expected = vec![
            algebraic_to_square("f3").expect("f3 should parse"),
            algebraic_to_square("h3").expect("h3 should parse"),
        ];
        expected.sort_unstable();
        assert_eq!(out, expected);
    }
}
