//! # Timestamp Value Object
//!
//! UTC timestamp wrapper for order records.
//!
//! # Examples
//!
//! ```
//! use brokerage_core::domain::value_objects::timestamp::Timestamp;
//!
//! let placed = Timestamp::now();
//! let later = Timestamp::from_millis(placed.timestamp_millis() + 1_000).unwrap();
//!
//! assert!(later.is_after(&placed));
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>`. Always UTC; assigned once at order
/// acceptance and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of the representable range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the timestamp as Unix milliseconds.
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the inner `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns true if this timestamp is strictly after `other`.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns true if this timestamp is strictly before `other`.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let ts = Timestamp::from_millis(1_704_067_200_000).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_704_067_200_000);
    }

    #[test]
    fn ordering() {
        let earlier = Timestamp::from_millis(1_000).unwrap();
        let later = Timestamp::from_millis(2_000).unwrap();

        assert!(later.is_after(&earlier));
        assert!(earlier.is_before(&later));
        assert!(!earlier.is_after(&earlier));
    }

    #[test]
    fn display_is_rfc3339() {
        let ts = Timestamp::from_millis(0).unwrap();
        assert!(ts.to_string().starts_with("1970-01-01T00:00:00"));
    }
}
