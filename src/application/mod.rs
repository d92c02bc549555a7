//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate a game and publish the resulting event; query
//! handlers only read.

pub mod handlers;

pub use handlers::{
    CreateGameHandler, CreateGameResult, DeleteGameCommand, DeleteGameHandler, GetGameHandler,
    GetGameQuery, GetTimerHandler, GetTimerQuery, RequestHintCommand, RequestHintHandler,
    ResetGameCommand, ResetGameHandler, SetSecretCodeCommand, SetSecretCodeHandler,
    StartGuessingCommand, StartGuessingHandler, SubmitGuessCommand, SubmitGuessHandler,
    SubmitGuessResult,
};
