//! `tictac` - run the engine behind a bridge or in the terminal.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tictac_bridge::cli::{Cli, Command};
use tictac_bridge::console::Console;
use tictac_bridge::{BridgeConfig, http, stdio};
use tictac_engine::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BridgeConfig::load_or_default(&cli.config)?;
    init_tracing(&config);

    let engine = Arc::new(GameEngine::new());

    match cli.command {
        Command::Stdio => run_stdio(engine).await,
        Command::Http { port, host } => {
            let config = config.with_overrides(host, port);
            http::serve(&config, engine).await?;
            Ok(())
        }
        Command::Play { auto_reset } => {
            let delay = auto_reset.then(|| Duration::from_millis(*config.auto_reset_delay_ms()));
            run_console(engine, delay).await
        }
    }
}

/// Logs go to stderr so stdout stays free for the stdio protocol.
fn init_tracing(config: &BridgeConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run_stdio(engine: Arc<GameEngine>) -> Result<()> {
    info!("Starting stdio bridge");
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        stdio::serve(&engine, stdin, stdout)
    })
    .await??;
    Ok(())
}

async fn run_console(engine: Arc<GameEngine>, auto_reset: Option<Duration>) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        let console = Console::new(&engine, stdin, stdout);
        match auto_reset {
            Some(delay) => console.with_auto_reset(delay).run(),
            None => console.run(),
        }
    })
    .await??;
    Ok(())
}
