//! Wall placement against the per-player budget.

use tracing::info;

use crate::errors::{GameResult, IllegalMoveReason, QuotaReason};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::refresh_check_flags;

/// Place `wall` on `square` for the side to move.
///
/// `|_` costs two walls. A wall that overlaps an existing segment or lies on
/// the outer board edge is refused without spending budget. The turn does
/// not pass.
pub fn place_wall(game_state: &GameState, wall: Wall, square: Square) -> GameResult<GameState> {
    let color = game_state.side_to_move;
    let remaining = game_state.walls_remaining[color.index()];
    let cost = wall.segments();

    if cost == 0 {
        return Err(IllegalMoveReason::WallAlreadyPresent.into());
    }
    if remaining == 0 {
        return Err(QuotaReason::NoWallsRemaining.into());
    }
    if cost > remaining {
        return Err(QuotaReason::NotEnoughWallsForDouble.into());
    }

    if (wall.has_west() && col_of(square) == 0)
        || (wall.has_south() && row_of(square) == BOARD_SIZE - 1)
    {
        return Err(IllegalMoveReason::WallOnBoardEdge.into());
    }

    let existing = game_state.wall_at(square);
    if (wall.has_west() && existing.has_west()) || (wall.has_south() && existing.has_south()) {
        return Err(IllegalMoveReason::WallAlreadyPresent.into());
    }

    let mut next = game_state.clone();
    next.walls[square as usize] = existing.merged(wall);
    next.walls_remaining[color.index()] = remaining - cost;
    next.promotion_square = None;
    refresh_check_flags(&mut next);

    info!(
        player = color.name(),
        wall = wall.token(),
        remaining = remaining - cost,
        "wall placed"
    );
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::place_wall;
    use crate::errors::{GameError, IllegalMoveReason, QuotaReason};
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid test square")
    }

    #[test]
    fn walls_merge_and_spend_budget_without_passing_the_turn() {
        let state = GameState::new_game();
        let next = place_wall(&state, Wall::West, sq("e4")).expect("west wall on e4");
        let next = place_wall(&next, Wall::South, sq("e4")).expect("south wall on e4");
        assert_eq!(next.wall_at(sq("e4")), Wall::WestSouth);
        assert_eq!(next.walls_remaining, [1, 3]);
        assert_eq!(next.side_to_move, Color::Light);
    }

    #[test]
    fn double_wall_needs_two_remaining() {
        let mut state = GameState::new_game();
        state.walls_remaining[Color::Light.index()] = 1;
        assert!(matches!(
            place_wall(&state, Wall::WestSouth, sq("c4")),
            Err(GameError::QuotaExceeded(QuotaReason::NotEnoughWallsForDouble))
        ));

        state.walls_remaining[Color::Light.index()] = 0;
        assert!(matches!(
            place_wall(&state, Wall::South, sq("c4")),
            Err(GameError::QuotaExceeded(QuotaReason::NoWallsRemaining))
        ));
    }

    #[test]
    fn redundant_and_edge_walls_are_refused() {
        let state = GameState::new_game();
        let next = place_wall(&state, Wall::South, sq("c4")).expect("south wall on c4");
        assert!(matches!(
            place_wall(&next, Wall::WestSouth, sq("c4")),
            Err(GameError::IllegalMove(IllegalMoveReason::WallAlreadyPresent))
        ));
        assert!(matches!(
            place_wall(&next, Wall::West, sq("a4")),
            Err(GameError::IllegalMove(IllegalMoveReason::WallOnBoardEdge))
        ));
        assert!(matches!(
            place_wall(&next, Wall::South, sq("h1")),
            Err(GameError::IllegalMove(IllegalMoveReason::WallOnBoardEdge))
        ));
        assert_eq!(next.walls_remaining[Color::Light.index()], 2);
    }

    #[test]
    fn wall_can_block_a_check() {
        let mut state = GameState::new_empty();
        state.set_piece(sq("e1"), Some(Piece::new(Color::Light, PieceKind::King)));
        state.set_piece(sq("a8"), Some(Piece::new(Color::Dark, PieceKind::King)));
        state.set_piece(sq("e8"), Some(Piece::new(Color::Dark, PieceKind::Rook)));
        state.in_check[Color::Light.index()] = true;

        let next = place_wall(&state, Wall::South, sq("e4")).expect("south wall on e4");
        assert!(!next.in_check[Color::Light.index()]);
    }
}
