//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod game;

pub use game::{
    CreateGameHandler, CreateGameResult, DeleteGameCommand, DeleteGameHandler, GetGameHandler,
    GetGameQuery, GetTimerHandler, GetTimerQuery, RequestHintCommand, RequestHintHandler,
    ResetGameCommand, ResetGameHandler, SetSecretCodeCommand, SetSecretCodeHandler,
    StartGuessingCommand, StartGuessingHandler, SubmitGuessCommand, SubmitGuessHandler,
    SubmitGuessResult,
};
