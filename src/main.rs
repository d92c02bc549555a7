//! Code Breaker server binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use code_breaker::adapters::{app_router, GameHandlers, InMemorySessionRegistry, RoomManager, WebSocketState};
use code_breaker::config::{AppConfig, ServerConfig};
use code_breaker::ports::{GameBroadcaster, SessionRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let registry: Arc<dyn SessionRegistry> = Arc::new(InMemorySessionRegistry::new());
    let rooms = Arc::new(RoomManager::new(config.game.observer_queue_capacity));
    let broadcaster: Arc<dyn GameBroadcaster> = rooms.clone();

    let handlers = GameHandlers::new(registry.clone(), broadcaster, config.game.settings()?);
    let websocket = WebSocketState::new(rooms, registry);
    let app = app_router(handlers, websocket, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        max_hints = config.game.max_hints,
        time_limit_secs = ?config.game.time_limit_secs,
        "Code Breaker server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
