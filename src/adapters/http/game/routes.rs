//! HTTP routes for game endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_game, delete_game, get_game, get_timer, request_hint, reset_game, set_secret_code,
    start_guessing, submit_guess, GameHandlers,
};

/// Creates the game router with all endpoints. Mounted under `/api/games`.
pub fn game_routes(handlers: GameHandlers) -> Router {
    Router::new()
        .route("/", post(create_game))
        .route("/:code", get(get_game).delete(delete_game))
        .route("/:code/set-secret", post(set_secret_code))
        .route("/:code/start-guessing", post(start_guessing))
        .route("/:code/guess", post(submit_guess))
        .route("/:code/hint", post(request_hint))
        .route("/:code/timer", get(get_timer))
        .route("/:code/reset", post(reset_game))
        .with_state(handlers)
}
