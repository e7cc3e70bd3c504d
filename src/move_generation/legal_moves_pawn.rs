//! Pawn target generation.
//!
//! Forward steps need empty squares and clear edges, captures and en passant
//! need a clear diagonal corner. Promotion is handled by the executor.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_empty, is_enemy, push_unique};
use crate::moves::wall_geometry::{wall_between, wall_diag};

pub fn generate_pawn_targets(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(pawn) = game_state.piece_at(from) else {
        return;
    };
    let color = pawn.color;
    let forward = color.forward();
    let walls = &game_state.walls;

    if let Some(one) = offset_square(from, forward, 0) {
        if is_empty(game_state, one) && !wall_between(walls, from, one) {
            push_unique(out, one);

            if row_of(from) == color.pawn_start_row() {
                if let Some(two) = offset_square(one, forward, 0) {
                    if is_empty(game_state, two) && !wall_between(walls, one, two) {
                        push_unique(out, two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(diag) = offset_square(from, forward, d_col) {
            if is_enemy(game_state, color, diag) && !wall_diag(walls, from, diag) {
                push_unique(out, diag);
            }
        }
    }

    if let Some(target) = en_passant_target(game_state, from) {
        push_unique(out, target);
    }
}

/// Square a pawn on `from` moves to when capturing en passant, if available.
pub fn en_passant_target(game_state: &GameState, from: Square) -> Option<Square> {
    let pawn = game_state.piece_at(from)?;
    if pawn.kind != PieceKind::Pawn {
        return None;
    }
    let ep = game_state.en_passant_square?;
    let victim = game_state.piece_at(ep)?;
    if victim.kind != PieceKind::Pawn
        || victim.color == pawn.color
        || row_of(ep) != row_of(from)
        || col_of(ep).abs_diff(col_of(from)) != 1
    {
        return None;
    }

    let target = offset_square(ep, pawn.color.forward(), 0)?;
    if !is_empty(game_state, target) || wall_diag(&game_state.walls, from, target) {
        return None;
    }
    Some(target)
}
