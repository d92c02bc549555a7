//! HTTP DTOs for game endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{CreateGameResult, SubmitGuessResult};
use crate::domain::foundation::GameCode;
use crate::domain::game::{GameError, GamePhase, Guess, Hint};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to set the secret code.
///
/// Digits are taken as plain integers so range errors surface as
/// validation failures rather than JSON rejections.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSecretCodeRequest {
    pub secret_code: Vec<i64>,
}

/// Request to submit a guess.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitGuessRequest {
    pub guess: Vec<i64>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for game creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateGameResponse {
    pub code: GameCode,
    pub message: String,
}

impl From<CreateGameResult> for CreateGameResponse {
    fn from(result: CreateGameResult) -> Self {
        Self {
            code: result.code,
            message: "Game created successfully. Share this code with other players.".to_string(),
        }
    }
}

/// Response for commands whose outcome is a phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseResponse {
    pub phase: GamePhase,
    pub message: String,
}

impl PhaseResponse {
    pub fn new(phase: GamePhase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
        }
    }
}

/// Response for a scored guess.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub guess: Guess,
    pub phase: GamePhase,
    pub is_victory: Option<bool>,
}

impl From<SubmitGuessResult> for GuessResponse {
    fn from(result: SubmitGuessResult) -> Self {
        Self {
            guess: result.guess,
            phase: result.phase,
            is_victory: result.is_victory,
        }
    }
}

/// Response for a revealed hint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub position: usize,
    pub digit: u8,
    pub hints_remaining: u8,
    pub message: String,
}

impl From<Hint> for HintResponse {
    fn from(hint: Hint) -> Self {
        Self {
            position: hint.position,
            digit: hint.digit,
            hints_remaining: hint.hints_remaining,
            message: "Hint revealed".to_string(),
        }
    }
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(code: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("Game not found: {}", code),
        }
    }
}

impl From<&GameError> for ErrorResponse {
    fn from(error: &GameError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}
