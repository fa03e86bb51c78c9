//! One play session: players from the config, moves from a console.

use crate::{Console, HumanPlayer, Orchestrator, PlayConfig, PlayError, Tally};
use std::io::{BufRead, Cursor, Write};
use tracing::{info, instrument};

/// Plays a session between two humans named by `config`.
///
/// With a `script` the moves come from it instead of `input` and each line
/// is echoed, so `output` reads like a typed game.
#[instrument(skip_all, fields(scripted = script.is_some()))]
pub fn run_session(
    config: &PlayConfig,
    script: Option<String>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Tally, PlayError> {
    let mut orchestrator = Orchestrator::new(
        Box::new(HumanPlayer::new(config.player_x_name().clone())),
        Box::new(HumanPlayer::new(config.player_o_name().clone())),
    );

    let tally = match script {
        Some(script) => {
            info!("Playing scripted moves");
            let mut scripted = Cursor::new(script);
            let mut console = Console::new(&mut scripted, output).with_echo(true);
            orchestrator.run(&mut console, *config.rematch())?
        }
        None => {
            info!("Playing interactively");
            let mut console = Console::new(input, output);
            orchestrator.run(&mut console, *config.rematch())?
        }
    };

    info!(%tally, "Session finished");
    Ok(tally)
}
