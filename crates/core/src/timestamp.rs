//! Timestamp value type
//!
//! A `Timestamp` is a point in time with nanosecond precision, stored as
//! seconds and nanoseconds since the Unix epoch. Valid timestamps lie between
//! `0001-01-01T00:00:00Z` and `9999-12-31T23:59:59.999999999Z`.

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds since epoch of 0001-01-01T00:00:00Z
pub const MIN_SECONDS: i64 = -62_135_596_800;

/// Seconds since epoch of 9999-12-31T23:59:59Z
pub const MAX_SECONDS: i64 = 253_402_300_799;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// Point in time with nanosecond precision
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    seconds: i64,
    nanoseconds: u32,
}

impl Timestamp {
    /// Create a timestamp from seconds and nanoseconds since the epoch
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimestamp`] if `nanoseconds` is not below
    /// one second or `seconds` falls outside the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use docsnap_core::Timestamp;
    ///
    /// let ts = Timestamp::new(1_700_000_000, 500).unwrap();
    /// assert_eq!(ts.seconds(), 1_700_000_000);
    /// assert!(Timestamp::new(0, 1_000_000_000).is_err());
    /// ```
    pub fn new(seconds: i64, nanoseconds: u32) -> CoreResult<Self> {
        if nanoseconds >= NANOS_PER_SECOND {
            return Err(CoreError::InvalidTimestamp(format!(
                "nanoseconds out of range: {}",
                nanoseconds
            )));
        }
        if !(MIN_SECONDS..=MAX_SECONDS).contains(&seconds) {
            return Err(CoreError::InvalidTimestamp(format!(
                "seconds out of range: {}",
                seconds
            )));
        }
        Ok(Self {
            seconds,
            nanoseconds,
        })
    }

    /// Create a timestamp from a UTC date
    ///
    /// Leap-second instants (which chrono reports with a nanosecond field of
    /// one second or more) are rejected.
    pub fn from_date(date: DateTime<Utc>) -> CoreResult<Self> {
        Self::new(date.timestamp(), date.timestamp_subsec_nanos())
    }

    /// Capture the current time
    pub fn now() -> CoreResult<Self> {
        Self::from_date(Utc::now())
    }

    /// Create a timestamp from milliseconds since the epoch
    pub fn from_millis(millis: i64) -> CoreResult<Self> {
        let seconds = millis.div_euclid(1000);
        let nanoseconds = millis.rem_euclid(1000) as u32 * NANOS_PER_MILLI;
        Self::new(seconds, nanoseconds)
    }

    /// Seconds since the epoch
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second nanoseconds
    pub fn nanoseconds(&self) -> u32 {
        self.nanoseconds
    }

    /// Convert to a UTC date
    pub fn to_date(&self) -> DateTime<Utc> {
        // Range was validated at construction, so this is always Some
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanoseconds).unwrap_or_default()
    }

    /// Milliseconds since the epoch, truncating sub-millisecond precision
    pub fn to_millis(&self) -> i64 {
        self.seconds * 1000 + i64::from(self.nanoseconds / NANOS_PER_MILLI)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_date().to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = CoreError;

    fn try_from(date: DateTime<Utc>) -> CoreResult<Self> {
        Self::from_date(date)
    }
}
