//! Errors used throughout the rules engine.
//!
//! `GameError` is the single error type returned by the session, the board
//! and game-log serializers, and the placement rules. Move-level variants
//! carry a reason enum so front-ends can present a precise message while
//! the engine state stays untouched.
//!
//! Usage guidelines:
//! - File-level failures (`Io`, `InvalidBoardFile`, `Parse`) leave the session
//!   exactly as it was before the call.
//! - `IllegalMove`, `QuotaExceeded` and `Phase` are recoverable and are the
//!   ones counted as failed lines during game-log replay.
//! - `GameOver` is returned for moves submitted after a terminal condition.

use thiserror::Error;

/// Unified error type for the obstacle chess engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A board file does not have the required structure (line or token count).
    #[error("invalid board file: {0}")]
    InvalidBoardFile(String),

    /// A token, square or action could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The action breaks a movement rule.
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMoveReason),

    /// The player has run out of walls, mines or trap doors, or placed one on
    /// a forbidden rank.
    #[error("quota exceeded: {0}")]
    QuotaExceeded(QuotaReason),

    /// The action is not allowed in the current phase of the game.
    #[error("phase error: {0}")]
    Phase(PhaseReason),

    /// The game already ended; only save, load and restore are accepted.
    #[error("the game is over")]
    GameOver,

    /// The requested restore point does not exist.
    #[error("no restore point at index {requested} (history holds {available})")]
    RestorePoint { requested: usize, available: usize },
}

/// Why a move, castle, wall or promotion was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("there is no piece on the origin square")]
    EmptyOrigin,
    #[error("the piece belongs to the other player")]
    NotYourPiece,
    #[error("origin and destination are the same square")]
    SameSquare,
    #[error("the piece cannot reach that square")]
    Unreachable,
    #[error("the move would leave your king in check")]
    LeavesKingInCheck,
    #[error("your king is still in check")]
    StillInCheck,
    #[error("the move would remove a king from the board")]
    KingDestroyed,
    #[error("the king or that rook has already moved")]
    CastlingRightsLost,
    #[error("the king or rook is not on its home square")]
    CastlingPiecesMissing,
    #[error("the castling path is blocked")]
    CastlingPathBlocked,
    #[error("cannot castle out of check")]
    CastlingOutOfCheck,
    #[error("the king would pass through an attacked square")]
    CastlingThroughCheck,
    #[error("a pawn promotion must be chosen first")]
    PromotionPending,
    #[error("no piece is waiting for promotion")]
    NoPromotionAvailable,
    #[error("that wall is already in place")]
    WallAlreadyPresent,
    #[error("walls cannot be placed on the board edge")]
    WallOnBoardEdge,
}

/// Why a placement exceeded the player's allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuotaReason {
    #[error("no walls remaining")]
    NoWallsRemaining,
    #[error("a double wall needs two walls remaining")]
    NotEnoughWallsForDouble,
    #[error("the mine has already been placed")]
    MineAlreadyUsed,
    #[error("the trap door has already been placed")]
    TrapAlreadyUsed,
    #[error("mines can only be placed in ranks 4 and 5")]
    MineRankRestricted,
    #[error("trap doors can only be placed in ranks 3 to 6")]
    TrapRankRestricted,
}

/// Why an action does not fit the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhaseReason {
    #[error("mines and trap doors cannot be added after the game has started")]
    PlacementAfterStart,
    #[error("passing is only allowed while obstacles are being placed")]
    PassAfterStart,
}

/// Result alias used across the crate.
pub type GameResult<T> = Result<T, GameError>;

impl From<IllegalMoveReason> for GameError {
    fn from(reason: IllegalMoveReason) -> Self {
        GameError::IllegalMove(reason)
    }
}

impl From<QuotaReason> for GameError {
    fn from(reason: QuotaReason) -> Self {
        GameError::QuotaExceeded(reason)
    }
}

impl From<PhaseReason> for GameError {
    fn from(reason: PhaseReason) -> Self {
        GameError::Phase(reason)
    }
}
