//! Command-line interface for the `tictac` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe engine with local transport bridges
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Single-game tic-tac-toe engine with stdio and HTTP bridges", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve JSON-lines requests on stdin/stdout
    Stdio,

    /// Serve the JSON API over HTTP
    Http {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Play in the terminal
    Play {
        /// Start a new game automatically after a win or draw
        #[arg(long)]
        auto_reset: bool,
    },
}
