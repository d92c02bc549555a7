//! Game command and query handlers.
//!
//! Command handlers mutate a game under its own lock and publish the
//! resulting event before releasing it, so observers see events in the
//! same order the mutations happened.

mod create_game;
mod delete_game;
mod get_game;
mod get_timer;
mod request_hint;
mod reset_game;
mod set_secret_code;
mod start_guessing;
mod submit_guess;

pub use create_game::{CreateGameHandler, CreateGameResult};
pub use delete_game::{DeleteGameCommand, DeleteGameHandler};
pub use get_game::{GetGameHandler, GetGameQuery};
pub use get_timer::{GetTimerHandler, GetTimerQuery};
pub use request_hint::{RequestHintCommand, RequestHintHandler};
pub use reset_game::{ResetGameCommand, ResetGameHandler};
pub use set_secret_code::{SetSecretCodeCommand, SetSecretCodeHandler};
pub use start_guessing::{StartGuessingCommand, StartGuessingHandler};
pub use submit_guess::{SubmitGuessCommand, SubmitGuessHandler, SubmitGuessResult};

use crate::domain::foundation::GameCode;
use crate::domain::game::GameError;
use crate::ports::{SessionRegistry, SharedGame};

/// Looks up a live game or fails with `NotFound`.
async fn find_game(registry: &dyn SessionRegistry, code: &GameCode) -> Result<SharedGame, GameError> {
    registry
        .find(code)
        .await
        .ok_or_else(|| GameError::not_found(*code))
}
