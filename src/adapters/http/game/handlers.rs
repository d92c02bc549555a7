//! HTTP handlers for game endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    CreateGameHandler, DeleteGameCommand, DeleteGameHandler, GetGameHandler, GetGameQuery,
    GetTimerHandler, GetTimerQuery, RequestHintCommand, RequestHintHandler, ResetGameCommand,
    ResetGameHandler, SetSecretCodeCommand, SetSecretCodeHandler, StartGuessingCommand,
    StartGuessingHandler, SubmitGuessCommand, SubmitGuessHandler,
};
use crate::domain::foundation::GameCode;
use crate::domain::game::{GameError, GameSettings};
use crate::ports::{GameBroadcaster, SessionRegistry};

use super::dto::{
    CreateGameResponse, ErrorResponse, GuessResponse, HintResponse, MessageResponse,
    PhaseResponse, SetSecretCodeRequest, SubmitGuessRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GameHandlers {
    create_handler: Arc<CreateGameHandler>,
    get_handler: Arc<GetGameHandler>,
    set_secret_handler: Arc<SetSecretCodeHandler>,
    start_guessing_handler: Arc<StartGuessingHandler>,
    submit_guess_handler: Arc<SubmitGuessHandler>,
    hint_handler: Arc<RequestHintHandler>,
    timer_handler: Arc<GetTimerHandler>,
    reset_handler: Arc<ResetGameHandler>,
    delete_handler: Arc<DeleteGameHandler>,
}

impl GameHandlers {
    /// Wires every game handler to the same registry and broadcaster.
    pub fn new(
        registry: Arc<dyn SessionRegistry>,
        broadcaster: Arc<dyn GameBroadcaster>,
        settings: GameSettings,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreateGameHandler::new(registry.clone(), settings)),
            get_handler: Arc::new(GetGameHandler::new(registry.clone())),
            set_secret_handler: Arc::new(SetSecretCodeHandler::new(
                registry.clone(),
                broadcaster.clone(),
            )),
            start_guessing_handler: Arc::new(StartGuessingHandler::new(
                registry.clone(),
                broadcaster.clone(),
            )),
            submit_guess_handler: Arc::new(SubmitGuessHandler::new(
                registry.clone(),
                broadcaster.clone(),
            )),
            hint_handler: Arc::new(RequestHintHandler::new(
                registry.clone(),
                broadcaster.clone(),
            )),
            timer_handler: Arc::new(GetTimerHandler::new(registry.clone())),
            reset_handler: Arc::new(ResetGameHandler::new(registry.clone(), broadcaster)),
            delete_handler: Arc::new(DeleteGameHandler::new(registry)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/games - Create a new game
pub async fn create_game(State(handlers): State<GameHandlers>) -> Response {
    let result = handlers.create_handler.handle().await;
    (StatusCode::CREATED, Json(CreateGameResponse::from(result))).into_response()
}

/// GET /api/games/:code - Get public game state
pub async fn get_game(
    State(handlers): State<GameHandlers>,
    Path(code): Path<String>,
) -> Response {
    let code = match parse_code(&code) {
        Ok(code) => code,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetGameQuery { code }).await {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// POST /api/games/:code/set-secret - Set the secret code
pub async fn set_secret_code(
    State(handlers): State<GameHandlers>,
    Path(code): Path<String>,
    body: Result<Json<SetSecretCodeRequest>, JsonRejection>,
) -> Response {
    let code = match parse_code(&code) {
        Ok(code) => code,
        Err(response) => return response,
    };
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_body(rejection),
    };

    let cmd = SetSecretCodeCommand {
        code,
        secret_code: req.secret_code,
    };

    match handlers.set_secret_handler.handle(cmd).await {
        Ok(phase) => (
            StatusCode::OK,
            Json(PhaseResponse::new(phase, "Secret code set successfully")),
        )
            .into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// POST /api/games/:code/start-guessing - Open the guessing phase
pub async fn start_guessing(
    State(handlers): State<GameHandlers>,
    Path(code): Path<String>,
) -> Response {
    let code = match parse_code(&code) {
        Ok(code) => code,
        Err(response) => return response,
    };

    match handlers
        .start_guessing_handler
        .handle(StartGuessingCommand { code })
        .await
    {
        Ok(phase) => (
            StatusCode::OK,
            Json(PhaseResponse::new(phase, "Guessing phase started")),
        )
            .into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// POST /api/games/:code/guess - Submit a guess
pub async fn submit_guess(
    State(handlers): State<GameHandlers>,
    Path(code): Path<String>,
    body: Result<Json<SubmitGuessRequest>, JsonRejection>,
) -> Response {
    let code = match parse_code(&code) {
        Ok(code) => code,
        Err(response) => return response,
    };
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_body(rejection),
    };

    let cmd = SubmitGuessCommand {
        code,
        guess: req.guess,
    };

    match handlers.submit_guess_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(GuessResponse::from(result))).into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// POST /api/games/:code/hint - Reveal one digit of the secret
pub async fn request_hint(
    State(handlers): State<GameHandlers>,
    Path(code): Path<String>,
) -> Response {
    let code = match parse_code(&code) {
        Ok(code) => code,
        Err(response) => return response,
    };

    match handlers.hint_handler.handle(RequestHintCommand { code }).await {
        Ok(hint) => (StatusCode::OK, Json(HintResponse::from(hint))).into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// GET /api/games/:code/timer - Elapsed and remaining time
pub async fn get_timer(
    State(handlers): State<GameHandlers>,
    Path(code): Path<String>,
) -> Response {
    let code = match parse_code(&code) {
        Ok(code) => code,
        Err(response) => return response,
    };

    match handlers.timer_handler.handle(GetTimerQuery { code }).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// POST /api/games/:code/reset - Return the game to SETUP
pub async fn reset_game(
    State(handlers): State<GameHandlers>,
    Path(code): Path<String>,
) -> Response {
    let code = match parse_code(&code) {
        Ok(code) => code,
        Err(response) => return response,
    };

    match handlers.reset_handler.handle(ResetGameCommand { code }).await {
        Ok(phase) => (
            StatusCode::OK,
            Json(PhaseResponse::new(phase, "Game reset successfully")),
        )
            .into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// DELETE /api/games/:code - Remove a game
pub async fn delete_game(
    State(handlers): State<GameHandlers>,
    Path(code): Path<String>,
) -> Response {
    let code = match parse_code(&code) {
        Ok(code) => code,
        Err(response) => return response,
    };

    match handlers.delete_handler.handle(DeleteGameCommand { code }).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Game deleted successfully")),
        )
            .into_response(),
        Err(e) => handle_game_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// A malformed code can never name a live game, so it is reported as missing.
fn parse_code(raw: &str) -> Result<GameCode, Response> {
    raw.parse::<GameCode>().map_err(|_| {
        (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found(raw))).into_response()
    })
}

fn bad_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "Rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn handle_game_error(error: GameError) -> Response {
    tracing::debug!(error = %error, "Game command rejected");
    let status = match &error {
        GameError::NotFound(_) => StatusCode::NOT_FOUND,
        GameError::Validation(_) => StatusCode::BAD_REQUEST,
        GameError::InvalidPhase { .. }
        | GameError::NoHintAvailable
        | GameError::SecretCodeNotSet => StatusCode::CONFLICT,
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}
