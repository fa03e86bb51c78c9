//! Human player that types moves at the console.

use super::Player;
use crate::{Console, PlayError};
use tictactoe_board::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Human player reading one move per line.
///
/// Accepts a number or a position label such as `center`. Text that is
/// neither gets a hint and another prompt.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, _board, console), fields(name = %self.name))]
    fn get_move(
        &mut self,
        mark: Mark,
        _board: &Board,
        console: &mut Console<'_>,
    ) -> Result<i64, PlayError> {
        loop {
            console.prompt(&format!("Player {} ({}) what is your move? ", mark, self.name))?;
            let line = console.read_line()?.ok_or(PlayError::InputClosed)?;
            let text = line.trim();

            if let Ok(index) = text.parse::<i64>() {
                return Ok(index);
            }
            if let Some(pos) = Position::from_label_or_number(text) {
                return Ok(pos.to_index() as i64);
            }

            debug!(input = text, "Unparseable move");
            console.say(&format!(
                "'{}' is not a position; enter a number between 0 and 8.",
                text
            ))?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
