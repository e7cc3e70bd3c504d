use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

/// Board file body: eight board lines and the state line, no header.
///
/// One token per cell, so a piece hides a wall and a wall hides an obstacle.
pub fn generate_board_file(game_state: &GameState) -> String {
    let mut lines: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| cell_token(game_state, square_at(row, col)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let active = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let en_passant = game_state
        .en_passant_square
        .map(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    lines.push(format!(
        "{} {} {} {} {} {}",
        active,
        game_state.walls_remaining[Color::Light.index()],
        game_state.walls_remaining[Color::Dark.index()],
        generate_castling_field(&game_state.has_moved),
        en_passant,
        game_state.halfmove_clock
    ));

    lines.join("\n")
}

fn cell_token(game_state: &GameState, square: Square) -> String {
    if let Some(piece) = game_state.piece_at(square) {
        return piece.to_char().to_string();
    }
    match game_state.wall_at(square) {
        Wall::None => game_state.obstacle_at(square).to_char().to_string(),
        wall => wall.token().to_owned(),
    }
}

fn generate_castling_field(has_moved: &[MovedFlags; 2]) -> String {
    let mut out = String::with_capacity(4);
    for flags in has_moved {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            out.push(if flags.allows(side) { '+' } else { '-' });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_board_file;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::board_file_parser::parse_board_file;

    #[test]
    fn generated_board_round_trips_through_the_parser() {
        let text = "\
r . . . k . . r
p p p . . p p p
. . . M . . . .
. . . . p . . .
. . . |_ P . . .
. . D . . _ . .
P P P P . P P P
R . . . K . . R
b 2 3 -+++ e5 4";
        let state = parse_board_file(text).expect("board should parse");
        assert_eq!(generate_board_file(&state), text);
    }

    #[test]
    fn king_move_writes_both_flags_as_disabled() {
        let mut state = GameState::new_game();
        state.has_moved[Color::Dark.index()].king = true;
        assert!(generate_board_file(&state).ends_with("w 3 3 ++-- - 0"));
    }

    #[test]
    fn piece_takes_priority_over_wall_and_obstacle() {
        let mut state = GameState::new_game();
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        state.walls[e2 as usize] = Wall::West;
        state.obstacles[e2 as usize] = Obstacle::Mine;
        let body = generate_board_file(&state);
        let rank_two = body.lines().nth(6).expect("rank 2 line");
        assert_eq!(rank_two, "P P P P P P P P");
    }
}
