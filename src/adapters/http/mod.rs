//! HTTP adapters - REST API and application router.
//!
//! [`app_router`] assembles the game routes, the WebSocket endpoint and the
//! health check behind the shared tower-http layers.

pub mod game;

use std::time::Duration;

use axum::{extract::State, http::HeaderValue, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::websocket::{websocket_router, WebSocketState};
use crate::config::ServerConfig;

pub use game::{game_routes, ErrorResponse, GameHandlers};

/// Health check payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub active_games: usize,
    /// Games with at least one connected observer.
    pub active_rooms: usize,
    /// Connected observers across all games.
    pub observers: usize,
}

/// GET / - Health check
pub async fn health(State(state): State<WebSocketState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Code Breaker API is running".to_string(),
        active_games: state.registry.count().await,
        active_rooms: state.room_manager.active_rooms().await.len(),
        observers: state.room_manager.total_client_count().await,
    })
}

/// Builds the full application router.
pub fn app_router(
    handlers: GameHandlers,
    websocket: WebSocketState,
    server: &ServerConfig,
) -> Router {
    let health_routes = Router::new()
        .route("/", get(health))
        .with_state(websocket.clone());

    Router::new()
        .merge(health_routes)
        .nest("/api/games", game_routes(handlers))
        .merge(websocket_router().with_state(websocket))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Permissive unless explicit origins are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::storage::InMemorySessionRegistry;
    use crate::adapters::websocket::{ClientId, RoomManager};
    use crate::domain::game::GameSettings;

    #[tokio::test]
    async fn health_reports_games_rooms_and_observers() {
        let rooms = Arc::new(RoomManager::default());
        let state = WebSocketState::new(rooms.clone(), Arc::new(InMemorySessionRegistry::new()));
        let code = state.registry.create(GameSettings::default()).await;
        state.registry.create(GameSettings::default()).await;
        let _a = rooms.join(&code, ClientId::new()).await;
        let _b = rooms.join(&code, ClientId::new()).await;

        let Json(body) = health(State(state)).await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.active_games, 2);
        assert_eq!(body.active_rooms, 1);
        assert_eq!(body.observers, 2);
    }

    #[test]
    fn cors_layer_accepts_configured_origins() {
        let _layer = cors_layer(&["http://localhost:5173".to_string()]);
        let _permissive = cors_layer(&[]);
    }
}
