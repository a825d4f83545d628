//! Server runner: wires the registry, router, heartbeat, and listener.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domain::SessionRegistry;
use crate::error::ServerError;
use crate::infrastructure::repository::InMemorySessionRegistry;

use super::handler::{banner, get_rooms, health_check, websocket_handler};
use super::heartbeat;
use super::signal::shutdown_signal;
use super::state::AppState;

/// Run the signaling relay server until a shutdown signal arrives.
///
/// The registry is constructed here and torn down when the server stops;
/// rooms and membership live only in memory.
pub async fn run_server(config: Config) -> Result<(), ServerError> {
    let registry: Arc<dyn SessionRegistry> = Arc::new(InMemorySessionRegistry::new());
    let state = Arc::new(AppState { registry });

    let app = build_router(&config.ws_path, state.clone());

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        "Signaling server running on http://localhost:{}{}",
        config.port,
        config.ws_path
    );

    let heartbeat_task = tokio::spawn(heartbeat::run(state));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    heartbeat_task.abort();
    Ok(())
}

fn build_router(ws_path: &str, state: Arc<AppState>) -> Router {
    Router::new()
        .route(ws_path, get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .fallback(banner)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
