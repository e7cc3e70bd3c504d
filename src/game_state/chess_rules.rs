//! Canonical rule constants.
//!
//! Starting layout, per-player allowances and the rank windows for hidden
//! obstacles.

/// Standard starting position in board-file form (rank 8 first).
pub const STARTING_POSITION_BOARD: &str = "\
r n b q k b n r
p p p p p p p p
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
P P P P P P P P
R N B Q K B N R
w 3 3 ++++ - 0";

/// Walls each player may place during a game.
pub const WALL_BUDGET: u8 = 3;

/// Half-moves without capture or pawn move that end the game in a draw.
pub const FIFTY_MOVE_LIMIT: u16 = 50;

/// Occurrences of one piece configuration that end the game in a draw.
pub const REPETITION_LIMIT: usize = 3;

/// Rows (zero-indexed from rank 8) that accept a trap door: ranks 6 to 3.
pub const TRAP_ROWS: std::ops::RangeInclusive<u8> = 2..=5;

/// Rows (zero-indexed from rank 8) that accept a mine: ranks 5 and 4.
pub const MINE_ROWS: std::ops::RangeInclusive<u8> = 3..=4;

/// Column of both kings at the start of the game.
pub const KING_HOME_COL: u8 = 4;
