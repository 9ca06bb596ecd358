//! Microsecond-precision UTC timestamps.
//!
//! Timestamps are persisted as `YYYY-MM-DDTHH:MM:SS.ffffff`. Values are
//! truncated to whole microseconds when created so that a save/reload cycle
//! reproduces them exactly.

use std::fmt;

use chrono::{NaiveDateTime, SubsecRound, TimeDelta, Utc};

use crate::error::Error;
use crate::Result;

/// The fixed textual format for persisted timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format accepted when parsing; tolerates any number of fractional digits.
const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A UTC point in time with microsecond precision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Returns the current UTC time, truncated to microseconds.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().naive_utc().trunc_subsecs(6))
    }

    /// Returns the current time, or one microsecond past `previous` if the
    /// clock has not moved beyond it.
    ///
    /// Refreshing `updated_at` through this keeps it strictly increasing
    /// even when two saves land within the same microsecond.
    #[must_use]
    pub fn now_after(previous: Self) -> Self {
        let now = Self::now();
        if now > previous {
            now
        } else {
            Self(previous.0 + TimeDelta::microseconds(1))
        }
    }

    /// Parses a timestamp from its persisted text form.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not in the expected format.
    pub fn parse(text: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(text, PARSE_FORMAT)
            .map(|t| Self(t.trunc_subsecs(6)))
            .map_err(|e| Error::serialization(format!("invalid timestamp '{text}': {e}")))
    }

    /// Wraps a naive UTC datetime, truncating it to microseconds.
    #[must_use]
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Self(datetime.trunc_subsecs(6))
    }

    /// Returns the underlying naive UTC datetime.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({self})")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}
