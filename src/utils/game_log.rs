//! Saved-file framing and game-log line handling.
//!
//! Both file kinds open with a timestamped `%` comment and close with
//! `% --- End ---`. A game log holds one action per line in commit order and
//! may open with `...` when black made the first recorded action.

use chrono::Local;

pub const BOARD_HEADER: &str = "% Game Saved:";
pub const LOG_HEADER: &str = "% Game Log Saved:";
pub const FILE_TRAILER: &str = "% --- End ---";

const TIMESTAMP_FORMAT: &str = "%d-%B-%Y - %H:%M:%S";

/// Frame `body` with a `header` line stamped with the local time and the
/// end trailer.
pub fn frame_with_timestamp(header: &str, body: &str) -> String {
    let stamp = Local::now().format(TIMESTAMP_FORMAT);
    if body.is_empty() {
        format!("{header} {stamp}\n{FILE_TRAILER}")
    } else {
        format!("{header} {stamp}\n{body}\n{FILE_TRAILER}")
    }
}

/// Game-log text for `labels`, optionally led by a `...` marking black as
/// the first mover.
pub fn generate_game_log<'a>(labels: impl IntoIterator<Item = &'a str>, black_first: bool) -> String {
    let mut lines: Vec<&str> = Vec::new();
    if black_first {
        lines.push("...");
    }
    lines.extend(labels);
    frame_with_timestamp(LOG_HEADER, &lines.join("\n"))
}

/// Action lines of a game log with comments and blank lines removed.
pub fn game_log_actions(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('%'))
}

#[cfg(test)]
mod tests {
    use super::{game_log_actions, generate_game_log, FILE_TRAILER, LOG_HEADER};

    #[test]
    fn log_text_is_framed_and_reads_back() {
        let text = generate_game_log(["e7-e5", "g1-f3"], true);
        let mut lines = text.lines();
        assert!(lines.next().expect("header line").starts_with(LOG_HEADER));
        assert_eq!(text.lines().last(), Some(FILE_TRAILER));

        let actions: Vec<&str> = game_log_actions(&text).collect();
        assert_eq!(actions, vec!["...", "e7-e5", "g1-f3"]);
    }

    #[test]
    fn empty_log_still_has_header_and_trailer() {
        let text = generate_game_log(std::iter::empty(), false);
        assert_eq!(text.lines().count(), 2);
        assert_eq!(game_log_actions(&text).count(), 0);
    }
}
