//! tictactoe_timeline - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tictactoe_timeline::{GameConfig, Position, Script, render_text, run_replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_file_logging(&config)?;
            run_tui(&config).await
        }
        Command::Replay {
            mode,
            moves,
            jump,
            instant,
            json,
        } => {
            init_stderr_logging(&config);
            let config = if instant {
                config.with_opponent_delay_ms(0)
            } else {
                config
            };
            replay(&config, Script::new(mode.into(), moves, jump), json).await
        }
    }
}

fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so the terminal UI is not overwritten.
fn init_file_logging(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging(config: &GameConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(config, script), fields(mode = %script.mode, moves = script.moves.len()))]
async fn replay(config: &GameConfig, script: Script, json: bool) -> Result<()> {
    info!(
        moves = ?script.moves.iter().map(Position::label).collect::<Vec<_>>(),
        "Replaying scripted game"
    );
    let snapshot = run_replay(config, &script).await;

    if json {
        let out = serde_json::to_string_pretty(&snapshot).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        print!("{}", render_text(&snapshot));
    }
    Ok(())
}
