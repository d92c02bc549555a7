//! Strongly-typed identifier value objects.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Number of characters in a game code.
pub const GAME_CODE_LENGTH: usize = 6;

/// Alphabet game codes are drawn from.
const GAME_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Short human-shareable identifier for a game session (e.g. `K3QZ7A`).
///
/// Always six characters of uppercase ASCII letters and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameCode([u8; GAME_CODE_LENGTH]);

impl GameCode {
    /// Draws a random code from the given generator.
    ///
    /// Uniqueness is not guaranteed here; the registry retries on collision.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; GAME_CODE_LENGTH];
        for byte in bytes.iter_mut() {
            *byte = GAME_CODE_ALPHABET[rng.gen_range(0..GAME_CODE_ALPHABET.len())];
        }
        Self(bytes)
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII bytes from the alphabet are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != GAME_CODE_LENGTH {
            return Err(ValidationError::wrong_length(
                "code",
                GAME_CODE_LENGTH,
                bytes.len(),
            ));
        }
        if !bytes.iter().all(|b| GAME_CODE_ALPHABET.contains(b)) {
            return Err(ValidationError::invalid_format(
                "code",
                "must contain only uppercase letters and digits",
            ));
        }

        let mut code = [0u8; GAME_CODE_LENGTH];
        code.copy_from_slice(bytes);
        Ok(Self(code))
    }
}

impl Serialize for GameCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GameCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_codes_are_six_uppercase_alphanumerics() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = GameCode::generate(&mut rng);
            let s = code.to_string();
            assert_eq!(s.len(), GAME_CODE_LENGTH);
            assert!(s
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn parse_accepts_valid_code() {
        let code: GameCode = "AB12CD".parse().unwrap();
        assert_eq!(code.as_str(), "AB12CD");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "ABC".parse::<GameCode>(),
            Err(ValidationError::wrong_length("code", 6, 3))
        );
    }

    #[test]
    fn parse_rejects_lowercase_and_symbols() {
        assert!("ab12cd".parse::<GameCode>().is_err());
        assert!("AB-2CD".parse::<GameCode>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let code: GameCode = "ZZ9ZZ9".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""ZZ9ZZ9""#);
        let back: GameCode = serde_json::from_str(r#""ZZ9ZZ9""#).unwrap();
        assert_eq!(back, code);
    }
}
