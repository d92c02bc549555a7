//! Game rules configuration

use serde::Deserialize;

use crate::domain::game::{GameSettings, CODE_LENGTH, DEFAULT_MAX_HINTS};

use super::error::ValidationError;

/// Process-wide game settings, applied to every new game.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Hints each game may reveal
    #[serde(default = "default_max_hints")]
    pub max_hints: u8,

    /// Optional guessing time limit in seconds
    pub time_limit_secs: Option<u64>,

    /// Events buffered per observer before new ones are dropped
    #[serde(default = "default_observer_queue_capacity")]
    pub observer_queue_capacity: usize,
}

impl GameConfig {
    /// Validate game configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if usize::from(self.max_hints) > CODE_LENGTH {
            return Err(ValidationError::TooManyHints(self.max_hints));
        }
        if self.time_limit_secs == Some(0) {
            return Err(ValidationError::InvalidTimeLimit);
        }
        if self.observer_queue_capacity == 0 {
            return Err(ValidationError::InvalidQueueCapacity);
        }
        Ok(())
    }

    /// Settings for newly created games.
    pub fn settings(&self) -> Result<GameSettings, ValidationError> {
        self.validate()?;
        GameSettings::new(self.max_hints, self.time_limit_secs)
            .map_err(|_| ValidationError::TooManyHints(self.max_hints))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_hints: default_max_hints(),
            time_limit_secs: None,
            observer_queue_capacity: default_observer_queue_capacity(),
        }
    }
}

fn default_max_hints() -> u8 {
    DEFAULT_MAX_HINTS
}

fn default_observer_queue_capacity() -> usize {
    128
}
