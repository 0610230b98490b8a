use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    Router,
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
};
use common::games::snake::SnakeSessionSettings;
use common::{log, log_error};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::session_tracker::SessionTracker;
use crate::ws_handler::handle_websocket;

#[derive(Clone)]
pub struct WebServerState {
    pub settings: SnakeSessionSettings,
    pub tracker: SessionTracker,
}

pub fn build_router(state: WebServerState, static_files_path: Option<PathBuf>) -> Router {
    // Any origin may open a game socket.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new().route("/ws", get(ws_upgrade_handler));

    if let Some(path) = static_files_path {
        log!("Serving static files from {}", path.display());
        router = router.fallback_service(ServeDir::new(path));
    }

    router.layer(cors).with_state(state)
}

pub async fn run_web_server(
    addr: SocketAddr,
    static_files_path: Option<PathBuf>,
    state: WebServerState,
) -> Result<(), String> {
    let app = build_router(state, static_files_path);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    log!("Snake game server listening on {} (WebSocket at /ws)", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Web server error: {}", e))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log!("Shutdown signal received"),
        Err(e) => log_error!("Failed to listen for Ctrl+C: {}", e),
    }
}

async fn ws_upgrade_handler(
    ws: WebSocketUpgrade,
    State(state): State<WebServerState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}
