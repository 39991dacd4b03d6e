//! Command-line interface for the terminal frontend.

use clap::Parser;
use std::path::PathBuf;
use strictly_tictactoe::Mark;

/// Strictly Tic-Tac-Toe - two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with game rules (name length bounds)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (the terminal itself belongs to the UI)
    #[arg(long, default_value = "strictly_tictactoe.log")]
    pub log_file: PathBuf,

    /// Pre-fill player one's name
    #[arg(long)]
    pub player_one: Option<String>,

    /// Pre-fill player two's name
    #[arg(long)]
    pub player_two: Option<String>,

    /// Mark for player one (x or o); player two gets the other
    #[arg(long, default_value = "x")]
    pub player_one_mark: Mark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["strictly_tictactoe"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.player_one_mark, Mark::X);
        assert_eq!(cli.log_file, PathBuf::from("strictly_tictactoe.log"));
    }

    #[test]
    fn test_prefill_flags() {
        let cli = Cli::parse_from([
            "strictly_tictactoe",
            "--player-one",
            "Amy",
            "--player-two",
            "Bob",
            "--player-one-mark",
            "O",
        ]);
        assert_eq!(cli.player_one.as_deref(), Some("Amy"));
        assert_eq!(cli.player_two.as_deref(), Some("Bob"));
        assert_eq!(cli.player_one_mark, Mark::O);
    }

    #[test]
    fn test_bad_mark_rejected() {
        assert!(Cli::try_parse_from(["strictly_tictactoe", "--player-one-mark", "z"]).is_err());
    }
}
