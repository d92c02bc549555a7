//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    pub fn from_unix_secs(secs: u64) -> Self {
        Self(DateTime::from_timestamp(secs as i64, 0).unwrap_or_default())
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Fractional seconds elapsed from `other` to this timestamp.
    ///
    /// Negative if `other` is later.
    pub fn seconds_since(&self, other: &Timestamp) -> f64 {
        let duration = self.0.signed_duration_since(other.0);
        match duration.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            None => duration.num_seconds() as f64,
        }
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0 + Duration::seconds(secs as i64))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        // 2024-01-15T00:00:00Z
        let ts = Timestamp::from_unix_secs(1705276800);

        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_from_unix_secs_works() {
        let ts = Timestamp::from_unix_secs(1705276800);
        assert_eq!(ts.as_datetime().year(), 2024);
        assert_eq!(ts.as_datetime().month(), 1);
        assert_eq!(ts.as_datetime().day(), 15);
    }

    #[test]
    fn timestamp_plus_secs_adds_correctly() {
        let ts1 = Timestamp::from_unix_secs(1000);
        let ts2 = ts1.plus_secs(60);
        assert_eq!(ts2, Timestamp::from_unix_secs(1060));
    }

    #[test]
    fn seconds_since_is_fractional() {
        let start = Timestamp::from_unix_secs(1000);
        let later = Timestamp(*start.as_datetime() + Duration::milliseconds(2_500));
        assert!((later.seconds_since(&start) - 2.5).abs() < f64::EPSILON);
        assert!((start.seconds_since(&later) + 2.5).abs() < f64::EPSILON);
    }
}
