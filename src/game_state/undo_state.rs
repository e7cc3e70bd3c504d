use crate::game_state::game_state::GameState;
use crate::utils::action_notation::Action;

/// Single history record: the action label and the full state captured
/// immediately before that action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub label: String,
    pub state: GameState,
}

impl UndoState {
    pub fn new(label: impl Into<String>, state: &GameState) -> Self {
        Self {
            label: label.into(),
            state: state.clone(),
        }
    }

    /// Coordinate moves and castles take part in repetition counting;
    /// placement, wall and promotion records do not.
    pub fn is_board_move(&self) -> bool {
        Action::label_is_board_move(&self.label)
    }
}
