use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{slide_targets, ROOK_DIRECTIONS};

pub fn generate_rook_targets(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(rook) = game_state.piece_at(from) else {
        return;
    };
    slide_targets(game_state, rook.color, from, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_targets;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid test square")
    }

    #[test]
    fn south_wall_stops_the_rook_ray() {
        let mut state = GameState::new_empty();
        state.set_piece(sq("a1"), Some(Piece::new(Color::Light, PieceKind::Rook)));
        state.walls[sq("a3") as usize] = Wall::South;

        let mut out = Vec::new();
        generate_rook_targets(&state, sq("a1"), &mut out);
        assert!(out.contains(&sq("a2")));
        assert!(!out.contains(&sq("a3")));
        assert!(!out.contains(&sq("a4")));
        assert!(out.contains(&sq("h1")));
    }

    #[test]
    fn rook_includes_enemy_and_stops_before_friend() {
        let mut state = GameState::new_empty();
        state.set_piece(sq("d4"), Some(Piece::new(Color::Light, PieceKind::Rook)));
        state.set_piece(sq("d6"), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        state.set_piece(sq("f4"), Some(Piece::new(Color::Light, PieceKind::Pawn)));

        let mut out = Vec::new();
        generate_rook_targets(&state, sq("d4"), &mut out);
        assert!(out.contains(&sq("d6")));
        assert!(!out.contains(&sq("d7")));
        assert!(out.contains(&sq("e4")));
        assert!(!out.contains(&sq("f4")));
    }
}
