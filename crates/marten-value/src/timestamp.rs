//! Calendar timestamps.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// A mutable calendar instant, stored as a millisecond offset from the Unix
/// epoch.
///
/// Timestamps are value-like for cloning purposes (a clone is a fresh
/// instance carrying the same instant) but mutable in place, so independence
/// of a clone from its source is observable.
pub struct Timestamp {
    epoch_millis: Mutex<i64>,
}

impl Timestamp {
    /// The current instant.
    pub fn now() -> Self {
        Self::from_epoch_millis(Utc::now().timestamp_millis())
    }

    /// Create a timestamp from a millisecond Unix epoch offset.
    pub fn from_epoch_millis(epoch_millis: i64) -> Self {
        Self {
            epoch_millis: Mutex::new(epoch_millis),
        }
    }

    /// The millisecond Unix epoch offset.
    pub fn epoch_millis(&self) -> i64 {
        *self.epoch_millis.lock()
    }

    /// Replace the stored instant.
    pub fn set_epoch_millis(&self, epoch_millis: i64) {
        *self.epoch_millis.lock() = epoch_millis;
    }

    /// The stored instant as a UTC datetime, or `None` if it is outside the
    /// representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch_millis())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "<timestamp {}ms>", self.epoch_millis()),
        }
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_round_trip() {
        let ts = Timestamp::from_epoch_millis(1_700_000_000_000);
        assert_eq!(ts.epoch_millis(), 1_700_000_000_000);
        assert_eq!(
            ts.to_datetime().unwrap().timestamp_millis(),
            1_700_000_000_000
        );
    }

    #[test]
    fn test_mutation() {
        let ts = Timestamp::from_epoch_millis(0);
        ts.set_epoch_millis(123);
        assert_eq!(ts.epoch_millis(), 123);
    }

    #[test]
    fn test_display_rfc3339() {
        let ts = Timestamp::from_epoch_millis(0);
        assert_eq!(format!("{}", ts), "1970-01-01T00:00:00+00:00");
    }
}
