//! Tentative application of coordinate moves and castles.
//!
//! Both entry points work on a clone of the incoming state and only hand the
//! clone back when every commit check passed, so a rejected move never
//! touches the caller's state.

use crate::errors::IllegalMoveReason;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::engine_config::PromotionPolicy;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, refresh_check_flags};
use crate::move_generation::legal_moves_pawn::en_passant_target;
use crate::move_generation::move_generator::pseudo_targets;
use crate::move_generation::obstacle_activation::activate_obstacle;
use crate::moves::wall_geometry::wall_between;

/// State after a committed move, plus the obstacle it set off.
#[derive(Debug, Clone)]
pub struct AppliedMove {
    pub state: GameState,
    pub event: Option<ObstacleEvent>,
}

pub fn apply_coordinate_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: PromotionPolicy,
) -> Result<AppliedMove, IllegalMoveReason> {
    let piece = game_state
        .piece_at(from)
        .ok_or(IllegalMoveReason::EmptyOrigin)?;
    if from == to {
        return Err(IllegalMoveReason::SameSquare);
    }
    let mover = piece.color;

    let mut captured = match game_state.piece_at(to) {
        Some(target) if target.color == mover => return Err(IllegalMoveReason::Unreachable),
        Some(_) => true,
        None => false,
    };

    let mut next = game_state.clone();

    // En passant removes the pawn beside the origin, not the one on `to`.
    if piece.kind == PieceKind::Pawn && en_passant_target(game_state, from) == Some(to) {
        if let Some(victim) = game_state.en_passant_square {
            next.set_piece(victim, None);
            captured = true;
        }
    }

    if piece.kind == PieceKind::Pawn || captured {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    next.set_piece(from, None);
    next.set_piece(to, Some(piece));

    next.promotion_square = None;
    if piece.kind == PieceKind::Pawn && row_of(to) == mover.promotion_row() {
        if promotion == PromotionPolicy::AutoQueen {
            next.set_piece(to, Some(Piece::new(mover, PieceKind::Queen)));
        }
        next.promotion_square = Some(to);
    }

    let event = activate_obstacle(&mut next, to);
    if next.piece_at(to).is_none() {
        next.promotion_square = None;
    }

    ensure_kings_survive(&next)?;
    if is_king_in_check(&next, mover) {
        return Err(if is_king_in_check(game_state, mover) {
            IllegalMoveReason::StillInCheck
        } else {
            IllegalMoveReason::LeavesKingInCheck
        });
    }

    update_castling_rights(&mut next, mover, from, to, piece.kind);

    next.en_passant_square =
        if piece.kind == PieceKind::Pawn && row_of(from).abs_diff(row_of(to)) == 2 {
            Some(to)
        } else {
            None
        };

    finish_turn(&mut next, mover);
    Ok(AppliedMove { state: next, event })
}

/// Castle the side to move with the rook on `side`.
///
/// The rook must be able to slide to the square next to the king, the king
/// must not be in check, must not pass an attacked square and must not end
/// in check.
pub fn apply_castle(
    game_state: &GameState,
    side: CastleSide,
) -> Result<AppliedMove, IllegalMoveReason> {
    let color = game_state.side_to_move;
    if !game_state.has_moved[color.index()].allows(side) {
        return Err(IllegalMoveReason::CastlingRightsLost);
    }

    let home = color.home_row();
    let king_sq = square_at(home, KING_HOME_COL);
    let rook_sq = square_at(home, side.rook_col());
    let pass_sq = square_at(home, side.rook_target_col());
    let king_target = square_at(home, side.king_target_col());

    let king = Piece::new(color, PieceKind::King);
    let rook = Piece::new(color, PieceKind::Rook);
    if game_state.piece_at(king_sq) != Some(king) || game_state.piece_at(rook_sq) != Some(rook) {
        return Err(IllegalMoveReason::CastlingPiecesMissing);
    }

    if !pseudo_targets(game_state, rook_sq).contains(&pass_sq)
        || game_state.piece_at(pass_sq).is_some()
        || wall_between(&game_state.walls, king_sq, pass_sq)
    {
        return Err(IllegalMoveReason::CastlingPathBlocked);
    }

    if is_king_in_check(game_state, color) {
        return Err(IllegalMoveReason::CastlingOutOfCheck);
    }

    let mut probe = game_state.clone();
    probe.set_piece(king_sq, None);
    probe.set_piece(pass_sq, Some(king));
    if is_king_in_check(&probe, color) {
        return Err(IllegalMoveReason::CastlingThroughCheck);
    }

    let mut next = game_state.clone();
    next.set_piece(king_sq, None);
    next.set_piece(rook_sq, None);
    next.set_piece(king_target, Some(king));
    next.set_piece(pass_sq, Some(rook));

    let king_event = activate_obstacle(&mut next, king_target);
    let rook_event = activate_obstacle(&mut next, pass_sq);

    ensure_kings_survive(&next)?;
    if is_king_in_check(&next, color) {
        return Err(IllegalMoveReason::LeavesKingInCheck);
    }

    let flags = &mut next.has_moved[color.index()];
    flags.king = true;
    flags.set_rook(side);

    next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    next.en_passant_square = None;
    next.promotion_square = None;

    finish_turn(&mut next, color);
    Ok(AppliedMove {
        state: next,
        event: king_event.or(rook_event),
    })
}

/// Castling written as a king move for the side to move: onto the rook's
/// corner (`e1-h1`) or onto the king's castled square (`e1-g1`).
pub fn castle_alias(game_state: &GameState, from: Square, to: Square) -> Option<CastleSide> {
    let color = game_state.side_to_move;
    let home = color.home_row();
    if from != square_at(home, KING_HOME_COL)
        || game_state.piece_at(from) != Some(Piece::new(color, PieceKind::King))
    {
        return None;
    }

    [CastleSide::KingSide, CastleSide::QueenSide]
        .into_iter()
        .find(|side| {
            to == square_at(home, side.rook_col())
                || to == square_at(home, side.king_target_col())
        })
}

fn ensure_kings_survive(game_state: &GameState) -> Result<(), IllegalMoveReason> {
    if game_state.count_kings(Color::Light) != 1 || game_state.count_kings(Color::Dark) != 1 {
        return Err(IllegalMoveReason::KingDestroyed);
    }
    Ok(())
}

fn finish_turn(game_state: &mut GameState, mover: Color) {
    refresh_check_flags(game_state);
    game_state.side_to_move = mover.opposite();
    game_state.phase = Phase::Playing;
}

fn update_castling_rights(
    game_state: &mut GameState,
    moving_color: Color,
    from: Square,
    to: Square,
    moved_piece: PieceKind,
) {
    let home = moving_color.home_row();
    if moved_piece == PieceKind::King && from == square_at(home, KING_HOME_COL) {
        game_state.has_moved[moving_color.index()].king = true;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if from == square_at(home, side.rook_col()) {
            game_state.has_moved[moving_color.index()].set_rook(side);
        }

        // Capturing a rook on its original square also removes rights.
        let enemy = moving_color.opposite();
        if to == square_at(enemy.home_row(), side.rook_col()) {
            game_state.has_moved[enemy.index()].set_rook(side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_castle, apply_coordinate_move, castle_alias};
    use crate::errors::IllegalMoveReason;
    use crate::game_state::chess_types::*;
    use crate::game_state::engine_config::PromotionPolicy;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid test square")
    }

    fn kings(light: &str, dark: &str) -> GameState {
        let mut state = GameState::new_empty();
        state.set_piece(sq(light), Some(Piece::new(Color::Light, PieceKind::King)));
        state.set_piece(sq(dark), Some(Piece::new(Color::Dark, PieceKind::King)));
        state
    }

    fn play(state: &GameState, from: &str, to: &str) -> Result<GameState, IllegalMoveReason> {
        apply_coordinate_move(state, sq(from), sq(to), PromotionPolicy::AutoQueen)
            .map(|applied| applied.state)
    }

    #[test]
    fn double_step_sets_en_passant_and_flips_side() {
        let state = GameState::new_game();
        let next = play(&state, "e2", "e4").expect("e2-e4 should be legal");
        assert_eq!(next.en_passant_square, Some(sq("e4")));
        assert_eq!(next.side_to_move, Color::Dark);
        assert_eq!(next.phase, Phase::Playing);
        assert_eq!(next.halfmove_clock, 0);
        assert_eq!(state.side_to_move, Color::Light);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut state = kings("e1", "e8");
        state.set_piece(sq("e5"), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        state.set_piece(sq("d7"), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        state.side_to_move = Color::Dark;
        state.halfmove_clock = 7;

        let after_push = play(&state, "d7", "d5").expect("d7-d5 should be legal");
        let captured = play(&after_push, "e5", "d6").expect("en passant should be legal");
        assert!(captured.piece_at(sq("d5")).is_none());
        assert_eq!(
            captured.piece_at(sq("d6")),
            Some(Piece::new(Color::Light, PieceKind::Pawn))
        );
        assert_eq!(captured.halfmove_clock, 0);
    }

    #[test]
    fn pinned_piece_cannot_expose_the_king() {
        let mut state = kings("e1", "a8");
        state.set_piece(sq("e2"), Some(Piece::new(Color::Light, PieceKind::Bishop)));
        state.set_piece(sq("e7"), Some(Piece::new(Color::Dark, PieceKind::Rook)));

        assert_eq!(
            play(&state, "e2", "d3").expect_err("pinned bishop must stay"),
            IllegalMoveReason::LeavesKingInCheck
        );
    }

    #[test]
    fn unresolved_check_is_reported_as_still_in_check() {
        let mut state = kings("e1", "a8");
        state.set_piece(sq("e7"), Some(Piece::new(Color::Dark, PieceKind::Rook)));
        state.set_piece(sq("a2"), Some(Piece::new(Color::Light, PieceKind::Pawn)));

        assert_eq!(
            play(&state, "a2", "a3").expect_err("check must be answered"),
            IllegalMoveReason::StillInCheck
        );
    }

    #[test]
    fn auto_queen_promotes_on_the_last_rank() {
        let mut state = kings("e1", "a8");
        state.set_piece(sq("g7"), Some(Piece::new(Color::Light, PieceKind::Pawn)));

        let next = play(&state, "g7", "g8").expect("promotion push should be legal");
        assert_eq!(
            next.piece_at(sq("g8")),
            Some(Piece::new(Color::Light, PieceKind::Queen))
        );
        assert_eq!(next.promotion_square, Some(sq("g8")));

        let asked = apply_coordinate_move(&state, sq("g7"), sq("g8"), PromotionPolicy::AskFrontEnd)
            .expect("promotion push should be legal");
        assert!(asked.state.promotion_pending());
    }

    #[test]
    fn trap_door_cannot_swallow_a_king() {
        let mut state = kings("e1", "e8");
        state.obstacles[sq("e2") as usize] = Obstacle::TrapDoor;

        assert_eq!(
            play(&state, "e1", "e2").expect_err("king must survive"),
            IllegalMoveReason::KingDestroyed
        );
    }

    #[test]
    fn castling_moves_both_pieces_and_spends_rights() {
        let mut state = kings("e1", "e8");
        state.set_piece(sq("h1"), Some(Piece::new(Color::Light, PieceKind::Rook)));

        let castled = apply_castle(&state, CastleSide::KingSide).expect("castle should succeed");
        let next = castled.state;
        assert_eq!(
            next.piece_at(sq("g1")),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            next.piece_at(sq("f1")),
            Some(Piece::new(Color::Light, PieceKind::Rook))
        );
        assert!(next.has_moved[Color::Light.index()].king);
        assert_eq!(next.side_to_move, Color::Dark);

        assert_eq!(castle_alias(&state, sq("e1"), sq("h1")), Some(CastleSide::KingSide));
        assert_eq!(castle_alias(&state, sq("e1"), sq("a1")), Some(CastleSide::QueenSide));
        assert_eq!(castle_alias(&state, sq("e1"), sq("g1")), Some(CastleSide::KingSide));
        assert_eq!(castle_alias(&state, sq("e1"), sq("c1")), Some(CastleSide::QueenSide));
        assert_eq!(castle_alias(&state, sq("e1"), sq("f1")), None);
        assert_eq!(castle_alias(&state, sq("e1"), sq("d1")), None);
    }

    #[test]
    fn castling_rejections_name_the_failed_condition() {
        let mut state = kings("e1", "a8");
        state.set_piece(sq("h1"), Some(Piece::new(Color::Light, PieceKind::Rook)));
        state.set_piece(sq("a1"), Some(Piece::new(Color::Light, PieceKind::Rook)));

        let mut attacked = state.clone();
        attacked.set_piece(sq("f8"), Some(Piece::new(Color::Dark, PieceKind::Rook)));
        assert_eq!(
            apply_castle(&attacked, CastleSide::KingSide).expect_err("f1 is attacked"),
            IllegalMoveReason::CastlingThroughCheck
        );

        let mut checked = state.clone();
        checked.set_piece(sq("e8"), Some(Piece::new(Color::Dark, PieceKind::Rook)));
        assert_eq!(
            apply_castle(&checked, CastleSide::QueenSide).expect_err("king is in check"),
            IllegalMoveReason::CastlingOutOfCheck
        );

        let mut blocked = state.clone();
        blocked.set_piece(sq("b1"), Some(Piece::new(Color::Light, PieceKind::Knight)));
        assert_eq!(
            apply_castle(&blocked, CastleSide::QueenSide).expect_err("b1 is occupied"),
            IllegalMoveReason::CastlingPathBlocked
        );

        let mut moved = state.clone();
        moved.has_moved[Color::Light.index()].king_side_rook = true;
        assert_eq!(
            apply_castle(&moved, CastleSide::KingSide).expect_err("rook has moved"),
            IllegalMoveReason::CastlingRightsLost
        );
        assert!(apply_castle(&moved, CastleSide::QueenSide).is_ok());
    }
}
