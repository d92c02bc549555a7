//! Guess scoring - pure well-placed / misplaced feedback.

use serde::{Deserialize, Serialize};

use super::digits::{DigitCode, CODE_LENGTH};

/// Feedback for one guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Right digit in the right position.
    pub well_placed: u8,
    /// Right digit in the wrong position, bounded by unmatched occurrences.
    pub misplaced: u8,
}

impl Score {
    /// True when every position is well placed.
    pub fn is_solved(&self) -> bool {
        self.well_placed as usize == CODE_LENGTH
    }
}

/// Scores `guess` against `secret`.
///
/// Exact matches are consumed first; each remaining guess digit then
/// consumes the first unmatched occurrence in the secret, so repeated digits
/// are never credited more often than they appear in the secret.
pub fn score(guess: &DigitCode, secret: &DigitCode) -> Score {
    let guess = guess.digits();
    let mut guess_left: [Option<u8>; CODE_LENGTH] = [None; CODE_LENGTH];
    let mut secret_left: [Option<u8>; CODE_LENGTH] = [None; CODE_LENGTH];
    let mut well_placed = 0;

    for (i, (&g, &s)) in guess.iter().zip(secret.digits()).enumerate() {
        if g == s {
            well_placed += 1;
        } else {
            guess_left[i] = Some(g);
            secret_left[i] = Some(s);
        }
    }

    let mut misplaced = 0;
    for g in guess_left.iter().flatten() {
        if let Some(slot) = secret_left.iter_mut().find(|s| **s == Some(*g)) {
            *slot = None;
            misplaced += 1;
        }
    }

    Score {
        well_placed,
        misplaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code(d: [u8; 4]) -> DigitCode {
        DigitCode::new(d).unwrap()
    }

    fn digits() -> impl Strategy<Value = DigitCode> {
        prop::array::uniform4(0u8..=9).prop_map(|d| DigitCode::new(d).unwrap())
    }

    #[test]
    fn identical_codes_are_fully_well_placed() {
        let s = score(&code([4, 2, 4, 2]), &code([4, 2, 4, 2]));
        assert_eq!(
            s,
            Score {
                well_placed: 4,
                misplaced: 0
            }
        );
        assert!(s.is_solved());
    }

    #[test]
    fn repeated_guess_digit_not_double_counted() {
        let s = score(&code([1, 1, 1, 4]), &code([1, 1, 2, 3]));
        assert_eq!(s.well_placed, 2);
        assert_eq!(s.misplaced, 0);
    }

    #[test]
    fn full_permutation_is_all_misplaced() {
        let s = score(&code([8, 7, 6, 5]), &code([5, 6, 7, 8]));
        assert_eq!(s.well_placed, 0);
        assert_eq!(s.misplaced, 4);
    }

    #[test]
    fn disjoint_digits_score_nothing() {
        let s = score(&code([0, 0, 0, 0]), &code([1, 2, 3, 4]));
        assert_eq!(s.well_placed, 0);
        assert_eq!(s.misplaced, 0);
        assert!(!s.is_solved());
    }

    #[test]
    fn misplaced_bounded_by_secret_occurrences() {
        // Secret has one 2; guess offers three 2s out of place.
        let s = score(&code([2, 2, 2, 9]), &code([1, 3, 4, 2]));
        assert_eq!(s.well_placed, 0);
        assert_eq!(s.misplaced, 1);
    }

    #[test]
    fn exact_match_takes_priority_over_misplaced() {
        // The 5 at index 3 matches exactly; the 5 at index 0 has nothing left.
        let s = score(&code([5, 1, 2, 5]), &code([3, 4, 6, 5]));
        assert_eq!(s.well_placed, 1);
        assert_eq!(s.misplaced, 0);
    }

    #[test]
    fn score_serializes_camel_case() {
        let json = serde_json::to_value(Score {
            well_placed: 1,
            misplaced: 2,
        })
        .unwrap();
        assert_eq!(json["wellPlaced"], 1);
        assert_eq!(json["misplaced"], 2);
    }

    proptest! {
        #[test]
        fn feedback_never_exceeds_code_length(guess in digits(), secret in digits()) {
            let s = score(&guess, &secret);
            prop_assert!(s.well_placed + s.misplaced <= 4);
        }

        #[test]
        fn scoring_against_itself_is_solved(secret in digits()) {
            let s = score(&secret, &secret);
            prop_assert_eq!(s.well_placed, 4);
            prop_assert_eq!(s.misplaced, 0);
        }

        #[test]
        fn total_matches_is_symmetric(a in digits(), b in digits()) {
            let ab = score(&a, &b);
            let ba = score(&b, &a);
            prop_assert_eq!(ab.well_placed, ba.well_placed);
            prop_assert_eq!(ab.misplaced, ba.misplaced);
        }
    }
}
