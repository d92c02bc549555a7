//! GameSession aggregate - one game's state machine.
//!
//! Owns the secret code, guess history, hint budget and timer. Every
//! mutation goes through a method here, and every method either applies
//! fully or returns an error without touching state.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::domain::foundation::{GameCode, StateMachine, Timestamp, ValidationError};

use super::digits::{DigitCode, CODE_LENGTH};
use super::scoring::{score, Score};
use super::{GameError, GamePhase};

/// Guesses allowed per game.
pub const MAX_ATTEMPTS: usize = 10;

/// Hint budget when none is configured.
pub const DEFAULT_MAX_HINTS: u8 = 2;

/// Per-game tunables fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    max_hints: u8,
    time_limit_secs: Option<u64>,
}

impl GameSettings {
    /// # Errors
    ///
    /// - `OutOfRange` if `max_hints` exceeds the code length
    /// - `OutOfRange` if `time_limit_secs` is zero
    pub fn new(max_hints: u8, time_limit_secs: Option<u64>) -> Result<Self, ValidationError> {
        if max_hints as usize > CODE_LENGTH {
            return Err(ValidationError::out_of_range(
                "max_hints",
                0,
                CODE_LENGTH as i64,
                max_hints as i64,
            ));
        }
        if time_limit_secs == Some(0) {
            return Err(ValidationError::out_of_range(
                "time_limit_secs",
                1,
                i64::MAX,
                0,
            ));
        }
        Ok(Self {
            max_hints,
            time_limit_secs,
        })
    }

    pub fn max_hints(&self) -> u8 {
        self.max_hints
    }

    pub fn time_limit_secs(&self) -> Option<u64> {
        self.time_limit_secs
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_hints: DEFAULT_MAX_HINTS,
            time_limit_secs: None,
        }
    }
}

/// One scored guess. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    /// 1-based submission order.
    pub id: u32,
    pub guess: DigitCode,
    pub well_placed: u8,
    pub misplaced: u8,
}

impl Guess {
    fn new(id: u32, guess: DigitCode, score: Score) -> Self {
        Self {
            id,
            guess,
            well_placed: score.well_placed,
            misplaced: score.misplaced,
        }
    }
}

/// A revealed digit of the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub position: usize,
    pub digit: u8,
    pub hints_remaining: u8,
}

/// Publicly visible state. Deliberately has no secret code field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub code: GameCode,
    pub phase: GamePhase,
    pub guesses: Vec<Guess>,
    pub max_attempts: usize,
    pub is_victory: Option<bool>,
}

/// Timer readout, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStatus {
    pub elapsed_time: Option<f64>,
    pub time_limit: Option<u64>,
    pub is_expired: bool,
    pub time_remaining: Option<f64>,
}

/// A single code breaker game.
///
/// # Invariants
///
/// - `secret_code` is `Some` iff `phase` is not `Setup`
/// - `is_victory` is `Some` iff `phase` is `GameOver`
/// - `guesses.len() <= MAX_ATTEMPTS`
/// - `revealed_positions` holds distinct indices below `CODE_LENGTH`, one per hint used
#[derive(Debug, Clone)]
pub struct GameSession {
    code: GameCode,
    settings: GameSettings,
    phase: GamePhase,
    secret_code: Option<DigitCode>,
    guesses: Vec<Guess>,
    is_victory: Option<bool>,
    revealed_positions: Vec<usize>,
    started_at: Option<Timestamp>,
}

impl GameSession {
    /// Creates a game in `Setup`.
    pub fn new(code: GameCode, settings: GameSettings) -> Self {
        Self {
            code,
            settings,
            phase: GamePhase::Setup,
            secret_code: None,
            guesses: Vec::new(),
            is_victory: None,
            revealed_positions: Vec::new(),
            started_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn code(&self) -> &GameCode {
        &self.code
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn is_victory(&self) -> Option<bool> {
        self.is_victory
    }

    pub fn max_hints(&self) -> u8 {
        self.settings.max_hints()
    }

    pub fn hints_used(&self) -> u8 {
        self.revealed_positions.len() as u8
    }

    pub fn hints_remaining(&self) -> u8 {
        self.max_hints() - self.hints_used()
    }

    pub fn time_limit_secs(&self) -> Option<u64> {
        self.settings.time_limit_secs()
    }

    /// Public view of the game. Never includes the secret.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            code: self.code,
            phase: self.phase,
            guesses: self.guesses.clone(),
            max_attempts: MAX_ATTEMPTS,
            is_victory: self.is_victory,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Stores the secret and moves to `Transition`.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless in `Setup`
    pub fn set_secret_code(&mut self, secret: DigitCode) -> Result<GamePhase, GameError> {
        self.advance(GamePhase::Setup, GamePhase::Transition)?;
        self.secret_code = Some(secret);
        Ok(self.phase)
    }

    /// Opens guessing and starts the timer.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless in `Transition`
    pub fn start_guessing(&mut self) -> Result<GamePhase, GameError> {
        self.start_guessing_at(Timestamp::now())
    }

    /// [`start_guessing`](Self::start_guessing) with an explicit clock reading.
    pub fn start_guessing_at(&mut self, now: Timestamp) -> Result<GamePhase, GameError> {
        self.advance(GamePhase::Transition, GamePhase::Guessing)?;
        self.started_at = Some(now);
        Ok(self.phase)
    }

    /// Scores and records a guess, ending the game on a solve or on the
    /// final attempt.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless in `Guessing`
    /// - `SecretCodeNotSet` if the secret is missing
    pub fn submit_guess(&mut self, guess: DigitCode) -> Result<Guess, GameError> {
        self.ensure_phase(GamePhase::Guessing)?;
        let secret = self.secret_code.ok_or(GameError::SecretCodeNotSet)?;

        let result = score(&guess, &secret);
        let record = Guess::new(self.guesses.len() as u32 + 1, guess, result);
        self.guesses.push(record.clone());

        if result.is_solved() {
            self.finish(true)?;
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.finish(false)?;
        }

        Ok(record)
    }

    /// Reveals one random unrevealed digit of the secret.
    ///
    /// Returns `Ok(None)` when the budget is spent or nothing is left to
    /// reveal; that is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless in `Guessing`
    pub fn use_hint(&mut self) -> Result<Option<Hint>, GameError> {
        self.use_hint_with(&mut rand::thread_rng())
    }

    /// [`use_hint`](Self::use_hint) with a caller-supplied generator.
    pub fn use_hint_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Hint>, GameError> {
        self.ensure_phase(GamePhase::Guessing)?;
        if self.hints_used() >= self.max_hints() {
            return Ok(None);
        }
        let Some(secret) = self.secret_code else {
            return Ok(None);
        };

        let unrevealed: Vec<usize> = (0..CODE_LENGTH)
            .filter(|p| !self.revealed_positions.contains(p))
            .collect();
        let Some(&position) = unrevealed.choose(rng) else {
            return Ok(None);
        };
        let Some(digit) = secret.digit_at(position) else {
            return Ok(None);
        };

        self.revealed_positions.push(position);
        Ok(Some(Hint {
            position,
            digit,
            hints_remaining: self.hints_remaining(),
        }))
    }

    /// Returns the game to a fresh `Setup`, keeping its code and settings.
    pub fn reset(&mut self) -> GamePhase {
        *self = Self::new(self.code, self.settings);
        self.phase
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Timer
    // ─────────────────────────────────────────────────────────────────────────

    /// Seconds since guessing started, or `None` before that.
    pub fn elapsed_secs_at(&self, now: Timestamp) -> Option<f64> {
        self.started_at.map(|start| now.seconds_since(&start))
    }

    /// True only when a limit is set and has been exceeded.
    pub fn is_time_expired_at(&self, now: Timestamp) -> bool {
        match (self.time_limit_secs(), self.elapsed_secs_at(now)) {
            (Some(limit), Some(elapsed)) => elapsed > limit as f64,
            _ => false,
        }
    }

    pub fn timer_at(&self, now: Timestamp) -> TimerStatus {
        let elapsed = self.elapsed_secs_at(now);
        let limit = self.time_limit_secs();
        TimerStatus {
            elapsed_time: elapsed,
            time_limit: limit,
            is_expired: self.is_time_expired_at(now),
            time_remaining: match (limit, elapsed) {
                (Some(limit), Some(elapsed)) => Some((limit as f64 - elapsed).max(0.0)),
                _ => None,
            },
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::invalid_phase(expected, self.phase))
        }
    }

    fn advance(&mut self, required: GamePhase, next: GamePhase) -> Result<(), GameError> {
        self.ensure_phase(required)?;
        self.phase = self
            .phase
            .transition_to(next)
            .map_err(|e| GameError::invalid_phase(required, e.from))?;
        Ok(())
    }

    fn finish(&mut self, victory: bool) -> Result<(), GameError> {
        self.advance(GamePhase::Guessing, GamePhase::GameOver)?;
        self.is_victory = Some(victory);
        Ok(())
    }
}
