//! Board-file-to-GameState parser.
//!
//! Eight board lines (rank 8 first) of one token per cell, then a state line
//! `active whiteWalls blackWalls castling enPassant fiftyCounter`. Lines
//! starting with `%` are comments. Blank lines are skipped too and do not
//! count towards the nine required lines, so hand-edited files with a stray
//! empty line still load.

use crate::errors::GameError;
use crate::game_state::chess_rules::WALL_BUDGET;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_end_checks::evaluate_terminal_flags;
use crate::move_generation::legal_move_checks::refresh_check_flags;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_board_file(text: &str) -> Result<GameState, GameError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('%'))
        .collect();

    if lines.len() != 9 {
        return Err(GameError::InvalidBoardFile(format!(
            "expected 9 board lines, found {}",
            lines.len()
        )));
    }

    let mut game_state = GameState::new_empty();

    for (row, line) in lines[..8].iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 8 {
            return Err(GameError::InvalidBoardFile(format!(
                "rank {} has {} cells, expected 8",
                8 - row,
                tokens.len()
            )));
        }
        for (col, token) in tokens.iter().enumerate() {
            parse_cell(token, square_at(row as u8, col as u8), &mut game_state)?;
        }
    }

    parse_state_line(lines[8], &mut game_state)?;

    for color in [Color::Light, Color::Dark] {
        let kings = game_state.count_kings(color);
        if kings != 1 {
            return Err(GameError::InvalidBoardFile(format!(
                "{} has {kings} kings, expected exactly one",
                color.name()
            )));
        }
    }

    refresh_check_flags(&mut game_state);
    game_state.terminal = evaluate_terminal_flags(&game_state, &[]);

    Ok(game_state)
}

fn parse_cell(token: &str, square: Square, game_state: &mut GameState) -> Result<(), GameError> {
    let idx = square as usize;
    match token {
        "|" => game_state.walls[idx] = Wall::West,
        "_" => game_state.walls[idx] = Wall::South,
        "|_" => game_state.walls[idx] = Wall::WestSouth,
        _ => {
            let mut chars = token.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(GameError::Parse(format!("invalid board token '{token}'"))),
            };
            if let Some(piece) = Piece::from_char(ch) {
                game_state.pieces[idx] = Some(piece);
            } else if let Some(obstacle) = Obstacle::from_char(ch) {
                game_state.obstacles[idx] = obstacle;
            } else {
                return Err(GameError::Parse(format!("invalid board token '{token}'")));
            }
        }
    }
    Ok(())
}

fn parse_state_line(line: &str, game_state: &mut GameState) -> Result<(), GameError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(GameError::InvalidBoardFile(format!(
            "state line must have 6 fields, found {}",
            fields.len()
        )));
    }

    game_state.side_to_move = match fields[0] {
        "w" => Color::Light,
        "b" => Color::Dark,
        other => return Err(GameError::Parse(format!("invalid active player: {other}"))),
    };
    game_state.walls_remaining = [parse_wall_count(fields[1])?, parse_wall_count(fields[2])?];
    game_state.has_moved = parse_castling_flags(fields[3])?;
    game_state.en_passant_square = match fields[4] {
        "-" => None,
        square => Some(algebraic_to_square(square)?),
    };
    game_state.halfmove_clock = fields[5]
        .parse::<u16>()
        .map_err(|_| GameError::Parse(format!("invalid fifty-move counter: {}", fields[5])))?;

    Ok(())
}

fn parse_wall_count(field: &str) -> Result<u8, GameError> {
    match field.parse::<u8>() {
        Ok(count) if count <= WALL_BUDGET => Ok(count),
        _ => Err(GameError::Parse(format!("invalid wall count: {field}"))),
    }
}

/// `+`/`-` for white king side, white queen side, black king side, black
/// queen side. Both sides of one color disabled means its king has moved.
fn parse_castling_flags(field: &str) -> Result<[MovedFlags; 2], GameError> {
    let flags: Vec<bool> = field
        .chars()
        .map(|ch| match ch {
            '+' => Ok(false),
            '-' => Ok(true),
            _ => Err(GameError::Parse(format!("invalid castling flags: {field}"))),
        })
        .collect::<Result<_, _>>()?;

    if flags.len() != 4 {
        return Err(GameError::Parse(format!("invalid castling flags: {field}")));
    }

    let side = |king_side: bool, queen_side: bool| MovedFlags {
        king: king_side && queen_side,
        king_side_rook: king_side,
        queen_side_rook: queen_side,
    };
    Ok([side(flags[0], flags[1]), side(flags[2], flags[3])])
}
