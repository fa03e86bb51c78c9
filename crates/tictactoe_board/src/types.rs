//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A player tag that is neither `X` nor `O`.
#[derive(Debug, Display, Clone, PartialEq, Eq, derive_more::Error)]
#[display("invalid player tag {:?} (expected \"X\" or \"O\")", tag)]
pub struct InvalidPlayerTag {
    /// The rejected tag.
    pub tag: String,
}

impl FromStr for Player {
    type Err = InvalidPlayerTag;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(InvalidPlayerTag { tag: s.to_string() }),
        }
    }
}

impl<'a> TryFrom<&'a str> for Player {
    type Error = InvalidPlayerTag;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<char> for Player {
    type Error = InvalidPlayerTag;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'X' => Ok(Player::X),
            'O' => Ok(Player::O),
            other => Err(InvalidPlayerTag {
                tag: other.to_string(),
            }),
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    #[display("*")]
    Empty,
    /// Occupied by player X.
    #[display("X")]
    X,
    /// Occupied by player O.
    #[display("O")]
    O,
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character rendering: `*`, `X` or `O`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '*',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player completed a winning line.
    #[display("{_0} wins")]
    Winner(Player),
    /// Board full, nobody won.
    #[display("draw")]
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_parse_tags_are_case_sensitive() {
        assert_eq!("X".parse::<Player>(), Ok(Player::X));
        assert_eq!(Player::try_from("O"), Ok(Player::O));
        assert!(Player::try_from("x").is_err());
        assert!(Player::try_from("Z").is_err());
        assert!(Player::try_from("").is_err());
        assert!(Player::try_from('*').is_err());
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.to_string(), "*");
        assert_eq!(Cell::from(Player::X).symbol(), 'X');
        assert_eq!(Cell::O.occupant(), Some(Player::O));
        assert_eq!(Cell::Empty.occupant(), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::O).to_string(), "O wins");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}
