//! Core board state representation.
//!
//! `GameState` holds the three co-indexed grids (pieces, obstacles, walls)
//! together with the turn, castling, en-passant, clock and allowance flags.
//! It is a plain value: history snapshots are full clones of it, and
//! tentative moves are tried on clones before being committed.

use crate::game_state::chess_rules::WALL_BUDGET;
use crate::game_state::chess_types::*;
use crate::utils::board_file_generator::generate_board_file;
use crate::utils::board_file_parser::parse_board_file;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Board layers, indexed by Square ---
    pub pieces: [Option<Piece>; 64],
    pub obstacles: [Obstacle; 64],
    pub walls: [Wall; 64],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub phase: Phase,
    /// [color] castling disablement flags.
    pub has_moved: [MovedFlags; 2],
    /// Square of the pawn that just advanced two ranks.
    pub en_passant_square: Option<Square>,
    /// [color] king currently attacked.
    pub in_check: [bool; 2],

    // --- Clocks / allowances ---
    pub halfmove_clock: u16,
    pub walls_remaining: [u8; 2],
    pub mine_used: [bool; 2],
    pub trap_used: [bool; 2],

    /// Square of the last pawn that reached its promotion row, until the
    /// promotion follow-up or the next move clears it.
    pub promotion_square: Option<Square>,

    pub terminal: TerminalFlags,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [None; 64],
            obstacles: [Obstacle::None; 64],
            walls: [Wall::None; 64],

            side_to_move: Color::Light,
            phase: Phase::Placement,
            has_moved: [MovedFlags::default(); 2],
            en_passant_square: None,
            in_check: [false; 2],

            halfmove_clock: 0,
            walls_remaining: [WALL_BUDGET; 2],
            mine_used: [false; 2],
            trap_used: [false; 2],

            promotion_square: None,
            terminal: TerminalFlags::default(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard layout, white to move, obstacle placement still open.
    pub fn new_game() -> Self {
        let mut state = Self::default();
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            state.pieces[square_at(0, col) as usize] = Some(Piece::new(Color::Dark, *kind));
            state.pieces[square_at(1, col) as usize] =
                Some(Piece::new(Color::Dark, PieceKind::Pawn));
            state.pieces[square_at(6, col) as usize] =
                Some(Piece::new(Color::Light, PieceKind::Pawn));
            state.pieces[square_at(7, col) as usize] = Some(Piece::new(Color::Light, *kind));
        }
        state
    }

    #[inline]
    pub fn from_board_file(text: &str) -> Result<Self, crate::errors::GameError> {
        parse_board_file(text)
    }

    /// Board file without the timestamp header and trailer.
    #[inline]
    pub fn get_board_file_body(&self) -> String {
        generate_board_file(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces[square as usize]
    }

    #[inline]
    pub fn obstacle_at(&self, square: Square) -> Obstacle {
        self.obstacles[square as usize]
    }

    #[inline]
    pub fn wall_at(&self, square: Square) -> Wall {
        self.walls[square as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.pieces[square as usize] = piece;
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(color, PieceKind::King));
        self.pieces
            .iter()
            .position(|cell| *cell == king)
            .map(|idx| idx as Square)
    }

    pub fn count_kings(&self, color: Color) -> usize {
        let king = Some(Piece::new(color, PieceKind::King));
        self.pieces.iter().filter(|cell| **cell == king).count()
    }

    /// Squares holding a piece of `color`, in board order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(_, cell)| matches!(cell, Some(piece) if piece.color == color))
            .map(|(idx, _)| idx as Square)
    }

    /// A pawn is waiting on its last rank for the `=X` follow-up.
    pub fn promotion_pending(&self) -> bool {
        self.promotion_square
            .and_then(|square| self.piece_at(square))
            .is_some_and(|piece| piece.kind == PieceKind::Pawn)
    }
}
