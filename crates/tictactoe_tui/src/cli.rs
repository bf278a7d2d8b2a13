//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File that receives log output (the terminal is used for the board)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.log_file, PathBuf::from("tictactoe.log"));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--log-file",
            "/tmp/game.log",
            "--log-level",
            "tictactoe_engine=debug",
        ])
        .unwrap();
        assert_eq!(cli.log_file, PathBuf::from("/tmp/game.log"));
        assert_eq!(cli.log_level, "tictactoe_engine=debug");
    }
}
