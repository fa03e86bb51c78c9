//! tictactoe - two-player terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, LogFilter, PlayConfig, run_session};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let log_filter = LogFilter::install();
    let cli = Cli::parse();

    let config = PlayConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.x_name.clone(), cli.o_name.clone(), cli.rematch_override());

    log_filter
        .apply_config(config.log_filter())
        .context("Failed to apply log filter")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&config, cli.script(), &mut stdin.lock(), &mut stdout.lock())
        .context("Game session ended early")?;
    Ok(())
}
