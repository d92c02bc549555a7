//! DigitCode value object - a validated sequence of four decimal digits.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Number of digits in a secret code or guess.
pub const CODE_LENGTH: usize = 4;

/// Largest allowed digit value.
pub const MAX_DIGIT: u8 = 9;

/// Exactly four digits in `0..=9`.
///
/// Used for both the secret code and guesses. Construction is the only
/// validation point, so everything downstream (scoring, hints) can assume
/// well-formed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitCode([u8; CODE_LENGTH]);

impl DigitCode {
    /// Creates a code from already-typed digits.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if any digit is greater than 9
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, ValidationError> {
        if let Some(&bad) = digits.iter().find(|&&d| d > MAX_DIGIT) {
            return Err(ValidationError::out_of_range(
                "digits",
                0,
                MAX_DIGIT as i64,
                bad as i64,
            ));
        }
        Ok(Self(digits))
    }

    /// Parses untrusted client input.
    ///
    /// `field` names the request field in the error (e.g. `secretCode`).
    ///
    /// # Errors
    ///
    /// - `WrongLength` unless exactly four values are given
    /// - `OutOfRange` for any value outside `0..=9`
    pub fn parse(field: &str, values: &[i64]) -> Result<Self, ValidationError> {
        if values.len() != CODE_LENGTH {
            return Err(ValidationError::wrong_length(
                field,
                CODE_LENGTH,
                values.len(),
            ));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, &value) in digits.iter_mut().zip(values) {
            if !(0..=MAX_DIGIT as i64).contains(&value) {
                return Err(ValidationError::out_of_range(
                    field,
                    0,
                    MAX_DIGIT as i64,
                    value,
                ));
            }
            *slot = value as u8;
        }
        Ok(Self(digits))
    }

    /// Returns the digits.
    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Returns the digit at `position`, if in range.
    pub fn digit_at(&self, position: usize) -> Option<u8> {
        self.0.get(position).copied()
    }
}

impl fmt::Display for DigitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl Serialize for DigitCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
