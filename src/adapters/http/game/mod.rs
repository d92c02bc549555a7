//! HTTP adapter for game endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateGameResponse, ErrorResponse, GuessResponse, HintResponse, MessageResponse,
    PhaseResponse, SetSecretCodeRequest, SubmitGuessRequest,
};
pub use handlers::GameHandlers;
pub use routes::game_routes;
