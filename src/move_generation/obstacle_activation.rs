//! Trap doors and mines going off under a landing piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::KING_OFFSETS;
use crate::moves::wall_geometry::step_blocked;

/// Spring whatever obstacle sits on `square` after a piece landed there.
///
/// A trap door swallows the landing piece and stays open. A mine removes the
/// landing piece and every neighbour not shielded by a wall, then is spent;
/// a mine laid over a trap door leaves the open trap door behind.
pub fn activate_obstacle(game_state: &mut GameState, square: Square) -> Option<ObstacleEvent> {
    match game_state.obstacle_at(square) {
        Obstacle::None => None,
        Obstacle::TrapDoor | Obstacle::OpenTrapDoor => {
            game_state.set_piece(square, None);
            game_state.obstacles[square as usize] = Obstacle::OpenTrapDoor;
            Some(ObstacleEvent::TrapDoor)
        }
        mine @ (Obstacle::Mine | Obstacle::MineOverTrap) => {
            detonate(game_state, square);
            game_state.obstacles[square as usize] = if mine == Obstacle::MineOverTrap {
                Obstacle::OpenTrapDoor
            } else {
                Obstacle::None
            };
            Some(ObstacleEvent::Mine)
        }
    }
}

fn detonate(game_state: &mut GameState, center: Square) {
    game_state.set_piece(center, None);
    for (d_row, d_col) in KING_OFFSETS {
        let Some(neighbour) = offset_square(center, d_row, d_col) else {
            continue;
        };
        if !step_blocked(&game_state.walls, center, neighbour) {
            game_state.set_piece(neighbour, None);
        }
    }
}
