//! Batch game-log replay.
//!
//! Run with:
//! `obstacle_chess <in-board> <game-log> <out-board>`
//!
//! Set `RUST_LOG=debug` to see every rejected action.

use std::process::ExitCode;

use obstacle_chess::errors::GameResult;
use obstacle_chess::game_state::game_session::GameSession;
use obstacle_chess::utils::render_game_state::render_game_state;
use tracing::error;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: obstacle_chess <in-board> <game-log> <out-board>";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [in_board, game_log, out_board] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(in_board, game_log, out_board) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "replay aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(in_board: &str, game_log: &str, out_board: &str) -> GameResult<()> {
    let mut session = GameSession::new();
    session.load_board_file(in_board)?;

    if session.status().checkmate {
        println!("the loaded position is already checkmate");
    }

    let summary = session.load_log_file(game_log)?;
    println!(
        "replayed {} actions, {} failed",
        summary.applied, summary.failed
    );

    session.save_board_file(out_board)?;
    println!("{}", render_game_state(session.state()));
    Ok(())
}
