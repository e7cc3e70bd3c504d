//! Crate root module declarations for the obstacle chess rules engine.
//!
//! Chess with hidden mines, trap doors and player-placed walls: board state
//! and history, wall-aware move generation, the move executor with obstacle
//! activation, terminal detectors, and the board-file and game-log formats.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod engine_config;
    pub mod game_session;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod wall_geometry;
}

pub mod move_generation {
    pub mod game_end_checks;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod obstacle_activation;
    pub mod obstacle_placement;
    pub mod wall_placement;
}

pub mod utils {
    pub mod action_notation;
    pub mod algebraic;
    pub mod board_file_generator;
    pub mod board_file_parser;
    pub mod game_log;
    pub mod render_game_state;
}
