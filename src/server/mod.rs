//! HTTP/JSON front end for the shared game session.

mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::session::GameSession;

pub use error::{ApiError, ApiResult};

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: GameSession,
}

impl AppState {
    pub fn new(session: GameSession) -> Self {
        AppState { session }
    }
}

/// Game API plus the menu/game pages and static assets.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        .route("/play", post(handlers::play))
        .route("/reset", post(handlers::reset))
        .route("/set_mode", post(handlers::set_mode))
        .route_service("/", ServeFile::new(config.pages_dir.join("menu.html")))
        .route_service("/game", ServeFile::new(config.pages_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured port, falling back to `fallback_port` once.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let primary = format!("{}:{}", config.host, config.port);
    match TcpListener::bind(&primary).await {
        Ok(listener) => Ok(listener),
        Err(err) => {
            tracing::warn!("could not bind {}: {}", primary, err);
            let fallback = format!("{}:{}", config.host, config.fallback_port);
            tracing::warn!("trying fallback address {}", fallback);
            TcpListener::bind(&fallback)
                .await
                .map_err(|source| ServerError::Bind {
                    addr: fallback,
                    source,
                })
        }
    }
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
