//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Comma-separated moves to play instead of reading stdin (e.g. 0,3,1,4,2)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub moves: Option<Vec<String>>,

    /// Display name for player X
    #[arg(long)]
    pub x_name: Option<String>,

    /// Display name for player O
    #[arg(long)]
    pub o_name: Option<String>,

    /// Offer a rematch after each game
    #[arg(long, overrides_with = "no_rematch")]
    pub rematch: bool,

    /// Play a single game even if the config enables rematches
    #[arg(long, overrides_with = "rematch")]
    pub no_rematch: bool,
}

impl Cli {
    /// Rematch setting from the command line; `None` defers to the config.
    pub fn rematch_override(&self) -> Option<bool> {
        match (self.rematch, self.no_rematch) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Joins the scripted moves into the line-per-move text the console reads.
    pub fn script(&self) -> Option<String> {
        self.moves.as_ref().map(|moves| {
            moves
                .iter()
                .map(|m| format!("{}\n", m.trim()))
                .collect::<String>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(cli.moves.is_none());
        assert!(cli.script().is_none());
        assert!(!cli.rematch);
        assert_eq!(cli.rematch_override(), None);
    }

    #[test]
    fn test_moves_become_script_lines() {
        let cli = Cli::parse_from(["tictactoe", "--moves", "0, 3,-1,center", "--rematch"]);
        assert_eq!(cli.script().as_deref(), Some("0\n3\n-1\ncenter\n"));
        assert!(cli.rematch);
    }

    #[test]
    fn test_rematch_flags_last_one_wins() {
        let on = Cli::parse_from(["tictactoe", "--rematch"]);
        assert_eq!(on.rematch_override(), Some(true));

        let off = Cli::parse_from(["tictactoe", "--no-rematch"]);
        assert_eq!(off.rematch_override(), Some(false));

        let flipped = Cli::parse_from(["tictactoe", "--rematch", "--no-rematch"]);
        assert_eq!(flipped.rematch_override(), Some(false));

        let flipped_back = Cli::parse_from(["tictactoe", "--no-rematch", "--rematch"]);
        assert_eq!(flipped_back.rematch_override(), Some(true));
    }
}
