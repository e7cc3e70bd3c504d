//! Terminal-oriented Unicode board renderer.
//!
//! Each cell prints as three characters: the west wall (`|`), the piece or
//! obstacle, and the south wall (`_`). Rank 8 is drawn first.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'0' + (BOARD_SIZE - row));
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let square = square_at(row, col);
            let wall = game_state.wall_at(square);
            out.push(if wall.has_west() { '|' } else { ' ' });
            out.push(cell_glyph(game_state, square));
            out.push(if wall.has_south() { '_' } else { ' ' });
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn cell_glyph(game_state: &GameState, square: Square) -> char {
    match (game_state.piece_at(square), game_state.obstacle_at(square)) {
        (Some(piece), _) => piece_to_unicode(piece),
        (None, Obstacle::None) => '·',
        (None, obstacle) => obstacle.to_char(),
    }
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
