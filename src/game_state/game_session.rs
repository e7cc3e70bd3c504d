//! Game session: the committed state, its snapshot history and the action
//! entry point used by front-ends and game-log replay.
//!
//! Every accepted action pushes a snapshot of the state it replaced, so the
//! history is a stack of pre-action states labelled with the action text.
//! Rejected actions never touch the committed state.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::{GameError, GameResult, IllegalMoveReason};
use crate::game_state::engine_config::EngineConfig;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_end_checks::evaluate_terminal_flags;
use crate::move_generation::legal_move_apply::{
    apply_castle, apply_coordinate_move, castle_alias, AppliedMove,
};
use crate::move_generation::legal_move_checks::refresh_check_flags;
use crate::move_generation::move_generator::pseudo_targets;
use crate::move_generation::obstacle_placement::{pass_turn, place_obstacle};
use crate::move_generation::wall_placement::place_wall;
use crate::utils::action_notation::{parse_action, Action};
use crate::utils::game_log::{
    frame_with_timestamp, game_log_actions, generate_game_log, BOARD_HEADER,
};

/// Snapshot of the flags a front-end needs after each action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub side_to_move: Color,
    pub check_light: bool,
    pub check_dark: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub fifty_move_draw: bool,
    pub threefold_draw: bool,
    pub phase: Phase,
    pub game_over: bool,
}

/// Outcome of a game-log replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub applied: usize,
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    history: Vec<UndoState>,
    config: EngineConfig,
    last_obstacle_event: Option<ObstacleEvent>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::new_game(),
            history: Vec::new(),
            config,
            last_obstacle_event: None,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Standard layout, white to move, placement phase, empty history.
    pub fn new_game(&mut self) {
        self.reset_to(GameState::new_game());
    }

    /// Replace the whole session with a board file. A failed load keeps the
    /// current session.
    pub fn load_board(&mut self, text: &str) -> GameResult<()> {
        let state = GameState::from_board_file(text)?;
        self.reset_to(state);
        self.report_terminal();
        Ok(())
    }

    pub fn save_board(&self) -> String {
        frame_with_timestamp(BOARD_HEADER, &self.state.get_board_file_body())
    }

    pub fn load_board_file(&mut self, path: impl AsRef<Path>) -> GameResult<()> {
        let text = fs::read_to_string(path)?;
        self.load_board(&text)
    }

    pub fn save_board_file(&self, path: impl AsRef<Path>) -> GameResult<()> {
        fs::write(path, self.save_board())?;
        Ok(())
    }

    /// Replay a game log on top of the current state.
    ///
    /// A first action `...` hands the move to black. It is recorded as a pass
    /// snapshot unless black already has the move. Failing lines are counted
    /// and skipped.
    pub fn load_log(&mut self, text: &str) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for (idx, action) in game_log_actions(text).enumerate() {
            if idx == 0 && action == "..." {
                self.hand_first_move_to_dark();
                continue;
            }

            match self.submit(action) {
                Ok(()) => summary.applied += 1,
                Err(err) => {
                    warn!(action, error = %err, "game log action failed");
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    fn hand_first_move_to_dark(&mut self) {
        if self.state.side_to_move == Color::Dark {
            return;
        }
        let mut next = self.state.clone();
        next.side_to_move = Color::Dark;
        self.commit(Action::Pass.notation(), next);
    }

    pub fn save_log(&self) -> String {
        let black_first = self
            .history
            .first()
            .is_some_and(|record| record.state.side_to_move == Color::Dark);
        generate_game_log(self.game_log(), black_first)
    }

    pub fn load_log_file(&mut self, path: impl AsRef<Path>) -> GameResult<ReplaySummary> {
        let text = fs::read_to_string(path)?;
        Ok(self.load_log(&text))
    }

    pub fn save_log_file(&self, path: impl AsRef<Path>) -> GameResult<()> {
        fs::write(path, self.save_log())?;
        Ok(())
    }

    /// Parse and apply one action. On error the session is unchanged.
    pub fn submit(&mut self, action: &str) -> GameResult<()> {
        let result = self.try_submit(action);
        if let Err(err) = &result {
            debug!(action, error = %err, "action rejected, state rolled back");
        }
        result
    }

    fn try_submit(&mut self, text: &str) -> GameResult<()> {
        let action = parse_action(text);
        let re_promotes =
            matches!(action, Ok(Action::Promote(_))) && self.state.promotion_square.is_some();
        if self.state.terminal.is_game_over() && !re_promotes {
            return Err(GameError::GameOver);
        }

        let action = action?;
        if self.state.promotion_pending() && !matches!(action, Action::Promote(_)) {
            return Err(IllegalMoveReason::PromotionPending.into());
        }

        match action {
            Action::Move { from, to } => match castle_alias(&self.state, from, to) {
                Some(side) => self.castle(side),
                None => self.coordinate_move(from, to),
            },
            Action::Castle(side) => self.castle(side),
            Action::Promote(kind) => self.promote(kind),
            Action::PlaceObstacle { kind, square } => {
                let next = place_obstacle(&self.state, kind, square)?;
                self.commit(action.notation(), next);
                Ok(())
            }
            Action::PlaceWall { wall, square } => {
                let next = place_wall(&self.state, wall, square)?;
                self.commit(action.notation(), next);
                Ok(())
            }
            Action::Pass => {
                let next = pass_turn(&self.state)?;
                self.commit(action.notation(), next);
                Ok(())
            }
        }
    }

    fn coordinate_move(&mut self, from: Square, to: Square) -> GameResult<()> {
        if from == to {
            return Err(IllegalMoveReason::SameSquare.into());
        }
        let piece = self
            .state
            .piece_at(from)
            .ok_or(IllegalMoveReason::EmptyOrigin)?;
        if piece.color != self.state.side_to_move {
            return Err(IllegalMoveReason::NotYourPiece.into());
        }
        if !pseudo_targets(&self.state, from).contains(&to) {
            return Err(IllegalMoveReason::Unreachable.into());
        }

        let applied = apply_coordinate_move(&self.state, from, to, self.config.promotion)?;
        self.commit_move(Action::Move { from, to }.notation(), applied);
        Ok(())
    }

    fn castle(&mut self, side: CastleSide) -> GameResult<()> {
        let applied = apply_castle(&self.state, side)?;
        self.commit_move(side.notation().to_owned(), applied);
        Ok(())
    }

    /// Re-type the pawn (or auto-promoted queen) that just reached its last
    /// rank.
    fn promote(&mut self, kind: PieceKind) -> GameResult<()> {
        let mover = self.state.side_to_move.opposite();
        let square = self
            .state
            .promotion_square
            .filter(|&square| self.state.piece_at(square).is_some_and(|p| p.color == mover))
            .ok_or(IllegalMoveReason::NoPromotionAvailable)?;

        let mut next = self.state.clone();
        next.set_piece(square, Some(Piece::new(mover, kind)));
        next.promotion_square = None;
        refresh_check_flags(&mut next);

        self.commit(Action::Promote(kind).notation(), next);
        Ok(())
    }

    fn commit_move(&mut self, label: String, applied: AppliedMove) {
        self.commit(label, applied.state);
        self.last_obstacle_event = applied.event;
        if let Some(event) = applied.event {
            info!(?event, "obstacle triggered");
        }
    }

    fn commit(&mut self, label: String, mut next: GameState) {
        self.history.push(UndoState::new(label, &self.state));
        self.last_obstacle_event = None;
        next.terminal = if next.promotion_pending() {
            TerminalFlags::default()
        } else {
            evaluate_terminal_flags(&next, &self.history)
        };
        self.state = next;
        self.report_terminal();
    }

    fn report_terminal(&self) {
        let terminal = self.state.terminal;
        let side = self.state.side_to_move.name();
        if terminal.checkmate {
            info!(loser = side, "checkmate");
        }
        if terminal.stalemate {
            info!(side, "stalemate");
        }
        if terminal.fifty_move {
            info!(halfmoves = self.state.halfmove_clock, "draw by the fifty-move rule");
        }
        if terminal.threefold {
            info!("draw by threefold repetition");
        }
    }

    /// Generator destinations for the piece on `from`, before obstacle and
    /// self-check validation.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        pseudo_targets(&self.state, from)
    }

    /// Destinations the side to move could actually commit from `from`,
    /// including the king's castling square.
    pub fn playable_targets(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.state.piece_at(from) else {
            return Vec::new();
        };
        if piece.color != self.state.side_to_move
            || self.state.terminal.is_game_over()
            || self.state.promotion_pending()
        {
            return Vec::new();
        }

        let mut targets: Vec<Square> = pseudo_targets(&self.state, from)
            .into_iter()
            .filter(|&to| {
                apply_coordinate_move(&self.state, from, to, self.config.promotion).is_ok()
            })
            .collect();

        if piece.kind == PieceKind::King {
            let home = piece.color.home_row();
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                if apply_castle(&self.state, side).is_ok() {
                    let king_target = square_at(home, side.king_target_col());
                    if !targets.contains(&king_target) {
                        targets.push(king_target);
                    }
                }
            }
        }

        targets
    }

    /// The castling flags still allow `side` for the player to move.
    pub fn can_castle(&self, side: CastleSide) -> bool {
        self.state.has_moved[self.state.side_to_move.index()].allows(side)
    }

    pub fn status(&self) -> GameStatus {
        let terminal = self.state.terminal;
        GameStatus {
            side_to_move: self.state.side_to_move,
            check_light: self.state.in_check[Color::Light.index()],
            check_dark: self.state.in_check[Color::Dark.index()],
            checkmate: terminal.checkmate,
            stalemate: terminal.stalemate,
            fifty_move_draw: terminal.fifty_move,
            threefold_draw: terminal.threefold,
            phase: self.state.phase,
            game_over: terminal.is_game_over(),
        }
    }

    #[inline]
    pub fn snapshot_count(&self) -> usize {
        self.history.len()
    }

    /// Recorded state `index`, as it was before action `index` was applied.
    pub fn snapshot_at(&self, index: usize) -> Option<&UndoState> {
        self.history.get(index)
    }

    /// Return to snapshot `index` and drop it and every later record.
    pub fn restore_to(&mut self, index: usize) -> GameResult<()> {
        if index >= self.history.len() {
            return Err(GameError::RestorePoint {
                requested: index,
                available: self.history.len(),
            });
        }
        self.history.truncate(index + 1);
        self.restore_last()
    }

    /// Undo the most recent action.
    pub fn restore_last(&mut self) -> GameResult<()> {
        let record = self.history.pop().ok_or(GameError::RestorePoint {
            requested: 0,
            available: 0,
        })?;
        debug!(action = %record.label, "restored snapshot");
        self.state = record.state;
        self.last_obstacle_event = None;
        Ok(())
    }

    /// Action labels in commit order.
    pub fn game_log(&self) -> Vec<&str> {
        self.history.iter().map(|record| record.label.as_str()).collect()
    }

    /// Obstacle set off by the latest move; cleared by this call.
    pub fn last_obstacle_event(&mut self) -> Option<ObstacleEvent> {
        self.last_obstacle_event.take()
    }

    fn reset_to(&mut self, state: GameState) {
        self.state = state;
        self.history.clear();
        self.last_obstacle_event = None;
    }
}
