//! Terminal condition detectors run after every commit.

use std::collections::HashMap;

use crate::game_state::chess_rules::{FIFTY_MOVE_LIMIT, REPETITION_LIMIT};
use crate::game_state::engine_config::PromotionPolicy;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_castle, apply_coordinate_move};
use crate::move_generation::move_generator::generate_candidate_moves;

/// `color` has at least one move that survives the commit checks.
pub fn has_legal_move(game_state: &GameState, color: Color) -> bool {
    let any_move = generate_candidate_moves(game_state, color)
        .into_iter()
        .any(|candidate| {
            apply_coordinate_move(game_state, candidate.from, candidate.to, PromotionPolicy::AutoQueen)
                .is_ok()
        });
    if any_move {
        return true;
    }

    game_state.side_to_move == color
        && [CastleSide::KingSide, CastleSide::QueenSide]
            .into_iter()
            .any(|side| apply_castle(game_state, side).is_ok())
}

#[inline]
pub fn is_fifty_move_draw(game_state: &GameState) -> bool {
    game_state.halfmove_clock >= FIFTY_MOVE_LIMIT
}

/// Some piece configuration occurs `REPETITION_LIMIT` times among the
/// board-move snapshots of `history` and the current position.
pub fn is_threefold_repetition(game_state: &GameState, history: &[UndoState]) -> bool {
    let mut seen: HashMap<&[Option<Piece>; 64], usize> = HashMap::new();
    let positions = history
        .iter()
        .filter(|record| record.is_board_move())
        .map(|record| &record.state.pieces)
        .chain(std::iter::once(&game_state.pieces));

    for pieces in positions {
        let count = seen.entry(pieces).or_insert(0);
        *count += 1;
        if *count >= REPETITION_LIMIT {
            return true;
        }
    }
    false
}

/// Evaluate every detector for the position reached after `history`.
pub fn evaluate_terminal_flags(game_state: &GameState, history: &[UndoState]) -> TerminalFlags {
    let side = game_state.side_to_move;
    let no_moves = !has_legal_move(game_state, side);
    let in_check = game_state.in_check[side.index()];

    TerminalFlags {
        checkmate: in_check && no_moves,
        stalemate: !in_check && no_moves,
        fifty_move: is_fifty_move_draw(game_state),
        threefold: is_threefold_repetition(game_state, history),
    }
}
