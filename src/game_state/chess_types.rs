//! Core value types for the three board layers and the pieces on them.
//!
//! Squares are indices `0..=63` laid out row-major with row 0 being rank 8
//! and column 0 being file a, so `0 == a8`, `7 == h8`, `56 == a1` and
//! `63 == h1`.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Board square index (`0..=63`, `0 == a8`).
pub type Square = u8;

pub const BOARD_SIZE: u8 = 8;

#[inline]
pub const fn square_at(row: u8, col: u8) -> Square {
    row * BOARD_SIZE + col
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / BOARD_SIZE
}

#[inline]
pub const fn col_of(square: Square) -> u8 {
    square % BOARD_SIZE
}

/// Offset a square by `(d_row, d_col)`, returning `None` off the board.
#[inline]
pub fn offset_square(square: Square, d_row: i8, d_col: i8) -> Option<Square> {
    let row = row_of(square) as i8 + d_row;
    let col = col_of(square) as i8 + d_col;
    if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
        Some(square_at(row as u8, col as u8))
    } else {
        None
    }
}

/// Side to move. `Light` is white (uppercase), `Dark` is black (lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row of the king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "white",
            Color::Dark => "black",
        }
    }
}

/// Piece kind (color is stored alongside in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used by the board file and promotion actions.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Board-file character: uppercase for light, lowercase for dark.
    pub fn to_char(self) -> char {
        match self.color {
            Color::Light => self.kind.letter(),
            Color::Dark => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self { color, kind })
    }
}

/// One cell of the obstacle layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Obstacle {
    #[default]
    None,
    /// `D`: armed trap door.
    TrapDoor,
    /// `O`: sprung trap door, swallows every piece landing on it.
    OpenTrapDoor,
    /// `M`: armed mine.
    Mine,
    /// `X`: armed mine sitting on a trap door.
    MineOverTrap,
}

impl Obstacle {
    pub const fn to_char(self) -> char {
        match self {
            Obstacle::None => '.',
            Obstacle::TrapDoor => 'D',
            Obstacle::OpenTrapDoor => 'O',
            Obstacle::Mine => 'M',
            Obstacle::MineOverTrap => 'X',
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Obstacle::None),
            'D' => Some(Obstacle::TrapDoor),
            'O' => Some(Obstacle::OpenTrapDoor),
            'M' => Some(Obstacle::Mine),
            'X' => Some(Obstacle::MineOverTrap),
            _ => None,
        }
    }
}

/// One cell of the wall layer. A cell owns its west and south edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wall {
    #[default]
    None,
    /// `|`: wall on the west edge.
    West,
    /// `_`: wall on the south edge.
    South,
    /// `L`: walls on both the west and south edges.
    WestSouth,
}

impl Wall {
    #[inline]
    pub const fn has_west(self) -> bool {
        matches!(self, Wall::West | Wall::WestSouth)
    }

    #[inline]
    pub const fn has_south(self) -> bool {
        matches!(self, Wall::South | Wall::WestSouth)
    }

    /// Number of single wall segments this cell carries.
    pub const fn segments(self) -> u8 {
        match self {
            Wall::None => 0,
            Wall::West | Wall::South => 1,
            Wall::WestSouth => 2,
        }
    }

    /// Combine an existing cell with a newly placed wall.
    pub const fn merged(self, added: Wall) -> Wall {
        let west = self.has_west() || added.has_west();
        let south = self.has_south() || added.has_south();
        match (west, south) {
            (true, true) => Wall::WestSouth,
            (true, false) => Wall::West,
            (false, true) => Wall::South,
            (false, false) => Wall::None,
        }
    }

    /// Board-file token for an otherwise empty cell.
    pub const fn token(self) -> &'static str {
        match self {
            Wall::None => ".",
            Wall::West => "|",
            Wall::South => "_",
            Wall::WestSouth => "|_",
        }
    }
}

/// The two obstacles a player may hide during the placement phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Mine,
    TrapDoor,
}

/// Reported to front-ends after a move set off an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleEvent {
    TrapDoor,
    Mine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Column of the rook before castling.
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on (the square the king passes over).
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "0-0",
            CastleSide::QueenSide => "0-0-0",
        }
    }
}

/// Castling disablement flags for one color; set permanently once a piece
/// leaves its home square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MovedFlags {
    pub king: bool,
    pub king_side_rook: bool,
    pub queen_side_rook: bool,
}

impl MovedFlags {
    pub const fn rook(self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.king_side_rook,
            CastleSide::QueenSide => self.queen_side_rook,
        }
    }

    pub fn set_rook(&mut self, side: CastleSide) {
        match side {
            CastleSide::KingSide => self.king_side_rook = true,
            CastleSide::QueenSide => self.queen_side_rook = true,
        }
    }

    /// Castling on `side` is still allowed by the flags.
    pub const fn allows(self, side: CastleSide) -> bool {
        !self.king && !self.rook(side)
    }
}

/// `Placement` accepts mines and trap doors; `Playing` begins with the first
/// coordinate move or castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Placement,
    Playing,
}

/// Result of the terminal detectors after the latest commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerminalFlags {
    pub checkmate: bool,
    pub stalemate: bool,
    pub fifty_move: bool,
    pub threefold: bool,
}

impl TerminalFlags {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        self.checkmate || self.stalemate || self.fifty_move || self.threefold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_layout_puts_a8_first_and_h1_last() {
        assert_eq!(square_at(0, 0), 0);
        assert_eq!(square_at(7, 7), 63);
        assert_eq!(row_of(52), 6);
        assert_eq!(col_of(52), 4);
        assert_eq!(offset_square(0, -1, 0), None);
        assert_eq!(offset_square(0, 1, 1), Some(9));
    }

    #[test]
    fn wall_merge_combines_edges() {
        assert_eq!(Wall::West.merged(Wall::South), Wall::WestSouth);
        assert_eq!(Wall::None.merged(Wall::South), Wall::South);
        assert_eq!(Wall::WestSouth.segments(), 2);
    }

    #[test]
    fn piece_chars_encode_color_by_case() {
        let black_knight = Piece::from_char('n').expect("n is a piece");
        assert_eq!(black_knight, Piece::new(Color::Dark, PieceKind::Knight));
        assert_eq!(black_knight.to_char(), 'n');
        assert!(Piece::from_char('x').is_none());
    }
}
