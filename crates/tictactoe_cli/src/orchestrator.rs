//! Game orchestration between players.

use crate::{Console, PlayError, Player};
use tictactoe_board::{Board, Mark, Outcome};
use tracing::{debug, info, instrument, warn};

/// Running count of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Orchestrates gameplay between two players on one board.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    tally: Tally,
}

impl Orchestrator {
    /// Creates a new orchestrator with an empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            tally: Tally::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns results so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Plays one game to a terminal state.
    ///
    /// X moves first. An accepted move passes the turn; a refused one is
    /// reported and the same player is asked again.
    #[instrument(skip_all)]
    pub fn play_game(&mut self, console: &mut Console<'_>) -> Result<Outcome, PlayError> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game"
        );
        let mut mark = Mark::X;

        while !self.board.is_terminal() {
            console.say(&self.board.render())?;

            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = player.name(), %mark, "Waiting for move");
            let choice = player.get_move(mark, &self.board, console)?;

            match self.board.try_move(mark, choice) {
                Ok(mov) => {
                    debug!(%mov, "Move accepted");
                    mark = mark.opponent();
                }
                Err(rejection) => {
                    warn!(%mark, choice, %rejection, "Move rejected");
                    console.say(&format!("Invalid move ({}), try again.", rejection))?;
                }
            }
        }

        let outcome = if self.board.has_won(Mark::X) {
            Outcome::Winner(Mark::X)
        } else if self.board.has_won(Mark::O) {
            Outcome::Winner(Mark::O)
        } else {
            Outcome::Draw
        };

        console.say("")?;
        console.say("Game over!")?;
        console.say("")?;
        console.say(&self.board.render())?;
        console.say(&self.describe(outcome))?;

        self.tally.record(outcome);
        info!(%outcome, "Game finished");
        Ok(outcome)
    }

    /// Plays games until the session ends.
    ///
    /// Without `rematch` exactly one game is played. With it, the players
    /// are asked after every game and the board is reset for each new one.
    #[instrument(skip(self, console))]
    pub fn run(&mut self, console: &mut Console<'_>, rematch: bool) -> Result<Tally, PlayError> {
        loop {
            self.play_game(console)?;
            if !rematch {
                break;
            }

            console.prompt("Play again? [y/N] ")?;
            let again = console
                .read_line()?
                .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
                .unwrap_or(false);
            if !again {
                break;
            }
            self.restart();
        }

        if rematch {
            console.say(&format!(
                "Final tally after {} games: {}",
                self.tally.games(),
                self.tally
            ))?;
        }
        Ok(self.tally)
    }

    /// Clears the board for a new game.
    pub fn restart(&mut self) {
        self.board.reset();
    }

    fn describe(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Winner(Mark::X) => format!("{} ({})", outcome, self.player_x.name()),
            Outcome::Winner(Mark::O) => format!("{} ({})", outcome, self.player_o.name()),
            Outcome::Draw => outcome.to_string(),
        }
    }
}
