//! Command-line interface for strictly_panel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Panel - LED tic-tac-toe controller
#[derive(Parser, Debug)]
#[command(name = "strictly_panel")]
#[command(about = "Drive a simulated LED tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on the interactive terminal panel
    Play {
        /// Panel configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Where to write logs while the terminal is in use
        #[arg(long, default_value = "strictly_panel.log")]
        log_file: PathBuf,
    },

    /// Replay a script of timed button presses without a terminal
    Replay {
        /// Script file (TOML)
        script: PathBuf,

        /// Panel configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}
