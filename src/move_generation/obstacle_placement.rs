//! Hidden mine and trap door placement before the first move.
//!
//! Each player may hide one mine (ranks 4 and 5) and one trap door
//! (ranks 3 to 6), or pass with `...`. Placing or passing hands the turn
//! to the opponent.

use crate::errors::{GameResult, PhaseReason, QuotaReason};
use crate::game_state::chess_rules::{MINE_ROWS, TRAP_ROWS};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn place_obstacle(
    game_state: &GameState,
    kind: ObstacleKind,
    square: Square,
) -> GameResult<GameState> {
    if game_state.phase != Phase::Placement {
        return Err(PhaseReason::PlacementAfterStart.into());
    }

    let color = game_state.side_to_move;
    let row = row_of(square);
    match kind {
        ObstacleKind::Mine => {
            if game_state.mine_used[color.index()] {
                return Err(QuotaReason::MineAlreadyUsed.into());
            }
            if !MINE_ROWS.contains(&row) {
                return Err(QuotaReason::MineRankRestricted.into());
            }
        }
        ObstacleKind::TrapDoor => {
            if game_state.trap_used[color.index()] {
                return Err(QuotaReason::TrapAlreadyUsed.into());
            }
            if !TRAP_ROWS.contains(&row) {
                return Err(QuotaReason::TrapRankRestricted.into());
            }
        }
    }

    let mut next = game_state.clone();
    next.obstacles[square as usize] = merge_obstacle(game_state.obstacle_at(square), kind);
    match kind {
        ObstacleKind::Mine => next.mine_used[color.index()] = true,
        ObstacleKind::TrapDoor => next.trap_used[color.index()] = true,
    }
    next.side_to_move = color.opposite();
    Ok(next)
}

/// Yield the turn without placing anything.
pub fn pass_turn(game_state: &GameState) -> GameResult<GameState> {
    if game_state.phase != Phase::Placement {
        return Err(PhaseReason::PassAfterStart.into());
    }
    let mut next = game_state.clone();
    next.side_to_move = next.side_to_move.opposite();
    Ok(next)
}

/// A mine and a trap door on one square become `X`.
pub fn merge_obstacle(existing: Obstacle, added: ObstacleKind) -> Obstacle {
    match (existing, added) {
        (Obstacle::None, ObstacleKind::Mine) => Obstacle::Mine,
        (Obstacle::None, ObstacleKind::TrapDoor) => Obstacle::TrapDoor,
        (Obstacle::TrapDoor | Obstacle::OpenTrapDoor, ObstacleKind::Mine) => Obstacle::MineOverTrap,
        (Obstacle::Mine | Obstacle::MineOverTrap, ObstacleKind::TrapDoor) => Obstacle::MineOverTrap,
        (existing, _) => existing,
    }
}

#[cfg(test)]
mod tests {
    use super::{merge_obstacle, pass_turn, place_obstacle};
    use crate::errors::{GameError, PhaseReason, QuotaReason};
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid test square")
    }

    #[test]
    fn placement_spends_the_quota_and_flips_the_turn() {
        let state = GameState::new_game();
        let next = place_obstacle(&state, ObstacleKind::Mine, sq("d5")).expect("mine on d5");
        assert_eq!(next.obstacle_at(sq("d5")), Obstacle::Mine);
        assert!(next.mine_used[Color::Light.index()]);
        assert_eq!(next.side_to_move, Color::Dark);

        let next = place_obstacle(&next, ObstacleKind::TrapDoor, sq("d5")).expect("trap on d5");
        assert_eq!(next.obstacle_at(sq("d5")), Obstacle::MineOverTrap);

        assert_eq!(next.side_to_move, Color::Light);
        assert!(matches!(
            place_obstacle(&next, ObstacleKind::Mine, sq("e4")),
            Err(GameError::QuotaExceeded(QuotaReason::MineAlreadyUsed))
        ));
    }

    #[test]
    fn each_player_hides_at_most_one_trap_door() {
        let state = GameState::new_game();
        let next = place_obstacle(&state, ObstacleKind::TrapDoor, sq("c3")).expect("white trap");
        let next = pass_turn(&next).expect("black passes");
        assert!(matches!(
            place_obstacle(&next, ObstacleKind::TrapDoor, sq("f6")),
            Err(GameError::QuotaExceeded(QuotaReason::TrapAlreadyUsed))
        ));

        // Black still has its own trap door.
        let next = pass_turn(&next).expect("white passes");
        assert_eq!(next.side_to_move, Color::Dark);
        assert!(place_obstacle(&next, ObstacleKind::TrapDoor, sq("f6")).is_ok());
    }

    #[test]
    fn rank_windows_are_enforced() {
        let state = GameState::new_game();
        assert!(matches!(
            place_obstacle(&state, ObstacleKind::Mine, sq("d3")),
            Err(GameError::QuotaExceeded(QuotaReason::MineRankRestricted))
        ));
        assert!(matches!(
            place_obstacle(&state, ObstacleKind::TrapDoor, sq("d7")),
            Err(GameError::QuotaExceeded(QuotaReason::TrapRankRestricted))
        ));
        assert!(place_obstacle(&state, ObstacleKind::TrapDoor, sq("d3")).is_ok());
        assert!(place_obstacle(&state, ObstacleKind::TrapDoor, sq("h6")).is_ok());
    }

    #[test]
    fn placement_and_pass_close_with_the_first_move() {
        let mut state = GameState::new_game();
        state.phase = Phase::Playing;
        assert!(matches!(
            place_obstacle(&state, ObstacleKind::TrapDoor, sq("c4")),
            Err(GameError::Phase(PhaseReason::PlacementAfterStart))
        ));
        assert!(matches!(
            pass_turn(&state),
            Err(GameError::Phase(PhaseReason::PassAfterStart))
        ));
    }

    #[test]
    fn merge_keeps_existing_layers() {
        assert_eq!(merge_obstacle(Obstacle::OpenTrapDoor, ObstacleKind::Mine), Obstacle::MineOverTrap);
        assert_eq!(merge_obstacle(Obstacle::OpenTrapDoor, ObstacleKind::TrapDoor), Obstacle::OpenTrapDoor);
        assert_eq!(merge_obstacle(Obstacle::Mine, ObstacleKind::Mine), Obstacle::Mine);
    }
}
