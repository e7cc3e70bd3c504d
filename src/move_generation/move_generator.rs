//! Per-square dispatch over the piece generators.
//!
//! The sets produced here ignore obstacle activation and self-check; the
//! executor applies those on a tentative copy of the state.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_targets;
use crate::move_generation::legal_moves_king::generate_king_targets;
use crate::move_generation::legal_moves_knight::generate_knight_targets;
use crate::move_generation::legal_moves_pawn::generate_pawn_targets;
use crate::move_generation::legal_moves_queen::generate_queen_targets;
use crate::move_generation::legal_moves_rook::generate_rook_targets;

/// One origin/destination pair produced by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
}

pub fn generate_targets(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = game_state.piece_at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_targets(game_state, from, out),
        PieceKind::Knight => generate_knight_targets(game_state, from, out),
        PieceKind::Bishop => generate_bishop_targets(game_state, from, out),
        PieceKind::Rook => generate_rook_targets(game_state, from, out),
        PieceKind::Queen => generate_queen_targets(game_state, from, out),
        PieceKind::King => generate_king_targets(game_state, from, out),
    }
}

/// Destinations of the piece on `from`; empty when the square is empty.
pub fn pseudo_targets(game_state: &GameState, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_targets(game_state, from, &mut out);
    out
}

/// Every generator move available to the pieces of `color`.
pub fn generate_candidate_moves(game_state: &GameState, color: Color) -> Vec<CandidateMove> {
    let mut moves = Vec::with_capacity(64);
    let mut targets = Vec::with_capacity(28);
    for from in game_state.squares_of(color) {
        targets.clear();
        generate_targets(game_state, from, &mut targets);
        moves.extend(targets.iter().map(|&to| CandidateMove { from, to }));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::generate_candidate_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_has_twenty_candidates_per_side() {
        let state = GameState::new_game();
        assert_eq!(generate_candidate_moves(&state, Color::Light).len(), 20);
        assert_eq!(generate_candidate_moves(&state, Color::Dark).len(), 20);
    }
}
