pub mod meta;
pub mod simulate;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::dispatching::SeekEngine;
use crate::error::{Error, Result};

/// Shared application state passed to all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: SeekEngine,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = config.engine.build();
        Self {
            config: Arc::new(config),
            engine,
        }
    }
}

/// Build the full API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/simulate", post(simulate::simulate))
        .route("/algorithms", get(meta::list_algorithms))
        .route("/health", get(meta::health))
}

/// Router with middleware and state attached.
pub fn app(state: AppState) -> Router {
    router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until the process stops.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| Error::Config(format!("invalid server address: {e}")))?;

    let state = AppState::new(config);
    tracing::info!(
        %addr,
        direction = %state.engine.direction(),
        tie_break = %state.engine.tie_break(),
        max_requests = state.config.limits.max_requests,
        "listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
