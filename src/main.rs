use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_server::clock::ClockTicker;
use connect_four_server::config::AppConfig;
use connect_four_server::server::{self, AppState};
use connect_four_server::session::GameSession;

/// Serve a two-player Connect Four game over HTTP.
#[derive(Parser)]
#[command(name = "connect-four-server", about = "Two-player Connect Four game server")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the listening port
    #[arg(long)]
    port: Option<u16>,

    /// Override the starting board preset (normal, large, 9x10)
    #[arg(long)]
    mode: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(port) = cli.port {
        app_config.server.port = port;
    }
    if let Some(mode) = cli.mode {
        app_config.game.mode = mode;
    }
    app_config.validate().context("validating configuration")?;

    let session = GameSession::new(
        app_config
            .game
            .initial_state()
            .context("building initial game")?,
    );

    let ticker = ClockTicker::new(session.clone(), app_config.clock.tick_interval()).spawn();

    let listener = server::bind(&app_config.server).await?;
    let addr = listener.local_addr().context("reading bound address")?;
    tracing::info!("server started on http://{}", addr);

    let app = server::router(AppState::new(session), &app_config.server);
    let result = server::serve(listener, app).await;

    ticker.stop().await;
    result.context("serving HTTP")
}
