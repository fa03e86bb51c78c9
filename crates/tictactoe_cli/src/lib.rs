//! Terminal tic-tac-toe.
//!
//! Drives a [`tictactoe_board::Board`] between two players: prompts for
//! moves, retries refused ones, reports the result and optionally offers a
//! rematch.
//!
//! # Architecture
//!
//! - **Console**: line-oriented input and output the game talks through
//! - **Players**: where moves come from (`Player` trait)
//! - **Orchestrator**: turn alternation, terminal detection, rematches
//! - **Config**: TOML settings with command-line overrides
//! - **Session**: wires config, players and console for the binary

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod logging;
mod orchestrator;
mod players;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, PlayConfig};
pub use console::Console;
pub use error::PlayError;
pub use logging::{DEFAULT_FILTER, LogFilter, effective_filter};
pub use orchestrator::{Orchestrator, Tally};
pub use players::{HumanPlayer, Player};
pub use session::run_session;
