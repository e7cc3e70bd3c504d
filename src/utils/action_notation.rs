//! Action grammar shared by `submit`, the game log and history labels.
//!
//! ```text
//! e2-e4      coordinate move
//! 0-0 0-0-0  castle king side / queen side
//! Md4 Dc3    hide a mine / trap door (placement phase only)
//! |e4 _e4    wall on the west / south edge of e4
//! |_e4       both walls at once
//! ...        pass during placement
//! =N         promotion follow-up
//! ```

use crate::errors::GameError;
use crate::game_state::chess_types::{CastleSide, ObstacleKind, PieceKind, Square, Wall};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move { from: Square, to: Square },
    Castle(CastleSide),
    PlaceObstacle { kind: ObstacleKind, square: Square },
    PlaceWall { wall: Wall, square: Square },
    Pass,
    Promote(PieceKind),
}

impl Action {
    /// Canonical text of the action as written to history and game logs.
    pub fn notation(&self) -> String {
        match self {
            Action::Move { from, to } => {
                format!("{}-{}", square_to_algebraic(*from), square_to_algebraic(*to))
            }
            Action::Castle(side) => side.notation().to_owned(),
            Action::PlaceObstacle { kind, square } => {
                let prefix = match kind {
                    ObstacleKind::Mine => 'M',
                    ObstacleKind::TrapDoor => 'D',
                };
                format!("{prefix}{}", square_to_algebraic(*square))
            }
            Action::PlaceWall { wall, square } => {
                format!("{}{}", wall.token(), square_to_algebraic(*square))
            }
            Action::Pass => "...".to_owned(),
            Action::Promote(kind) => format!("={}", kind.letter()),
        }
    }

    /// True when a history label names a coordinate move or castle.
    pub fn label_is_board_move(label: &str) -> bool {
        matches!(
            parse_action(label),
            Ok(Action::Move { .. } | Action::Castle(_))
        )
    }
}

pub fn parse_action(text: &str) -> Result<Action, GameError> {
    let text = text.trim();

    match text {
        "..." => return Ok(Action::Pass),
        "0-0" => return Ok(Action::Castle(CastleSide::KingSide)),
        "0-0-0" => return Ok(Action::Castle(CastleSide::QueenSide)),
        _ => {}
    }

    if let Some(rest) = text.strip_prefix('=') {
        let mut chars = rest.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(letter), None) => PieceKind::from_letter(letter),
            _ => None,
        };
        return match kind {
            Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Ok(Action::Promote(kind))
            }
            _ => Err(GameError::Parse(format!("invalid promotion: {text}"))),
        };
    }

    if let Some(rest) = text.strip_prefix("|_") {
        return Ok(Action::PlaceWall {
            wall: Wall::WestSouth,
            square: algebraic_to_square(rest)?,
        });
    }
    if let Some(rest) = text.strip_prefix('|') {
        return Ok(Action::PlaceWall {
            wall: Wall::West,
            square: algebraic_to_square(rest)?,
        });
    }
    if let Some(rest) = text.strip_prefix('_') {
        return Ok(Action::PlaceWall {
            wall: Wall::South,
            square: algebraic_to_square(rest)?,
        });
    }
    if let Some(rest) = text.strip_prefix('M') {
        return Ok(Action::PlaceObstacle {
            kind: ObstacleKind::Mine,
            square: algebraic_to_square(rest)?,
        });
    }
    if let Some(rest) = text.strip_prefix('D') {
        return Ok(Action::PlaceObstacle {
            kind: ObstacleKind::TrapDoor,
            square: algebraic_to_square(rest)?,
        });
    }

    let mut parts = text.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Ok(Action::Move {
            from: algebraic_to_square(from)?,
            to: algebraic_to_square(to)?,
        }),
        _ => Err(GameError::Parse(format!("invalid action: {text}"))),
    }
}
