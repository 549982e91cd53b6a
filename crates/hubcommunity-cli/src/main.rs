//! hubcommunity - command-line viewer for Hub Community events and communities.
//!
//! Reads through a local cache so listings keep working offline once a
//! snapshot has been fetched.

mod app;
mod args;
mod output;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hubcommunity_core::Config;

use app::App;
use args::{Cli, Command};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing();

    let config = Config::load()?;
    info!(command = ?cli.command, "hubcommunity starting");

    if let Command::Config { .. } = cli.command {
        return app::update_config(config, &cli.command);
    }

    let app = App::new(&config)?;
    app.run(&cli.command).await
}
