use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{slide_targets, BISHOP_DIRECTIONS};

pub fn generate_bishop_targets(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(bishop) = game_state.piece_at(from) else {
        return;
    };
    slide_targets(game_state, bishop.color, from, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_targets;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn double_wall_cuts_the_south_west_diagonal_only() {
        let e5 = algebraic_to_square("e5").expect("e5 should parse");
        let d4 = algebraic_to_square("d4").expect("d4 should parse");
        let mut state = GameState::new_empty();
        state.set_piece(e5, Some(Piece::new(Color::Dark, PieceKind::Bishop)));

        let mut open = Vec::new();
        generate_bishop_targets(&state, e5, &mut open);
        assert_eq!(open.len(), 13);
        assert!(open.contains(&d4));

        state.walls[e5 as usize] = Wall::WestSouth;
        let mut walled = Vec::new();
        generate_bishop_targets(&state, e5, &mut walled);
        assert!(!walled.contains(&d4));
        assert_eq!(walled.len(), 9);
    }
}
