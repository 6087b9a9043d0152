//! Strictly Panel - LED tic-tac-toe controller
//!
//! Runs the board interactively in a terminal or replays scripted presses.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use std::sync::Mutex;
use strictly_panel::{PanelConfig, Script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => run_play(config, log_file),
        Command::Replay {
            script,
            config,
            json,
        } => run_replay(script, config, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the interactive terminal panel
fn run_play(config: Option<PathBuf>, log_file: PathBuf) -> Result<()> {
    // The terminal belongs to the panel, so logs go to a file.
    let file = std::fs::File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    let config = PanelConfig::load(config.as_deref())?;
    info!(?config, "Starting interactive panel");

    let state = strictly_panel::terminal::run(&config)?;
    println!("{}", state.outcome());
    Ok(())
}

/// Replay a button script headlessly
#[instrument(skip_all, fields(script = %script.display()))]
fn run_replay(script: PathBuf, config: Option<PathBuf>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = PanelConfig::load(config.as_deref())?;
    let script = Script::from_file(&script)?;
    let controller = strictly_panel::replay(&script, &config)?;

    let state = controller.state();
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        println!("{}", strictly_panel::status::render_board(state.board()));
        println!("{}", state.outcome());
    }
    Ok(())
}
